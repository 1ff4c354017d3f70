use {
    super::repository::{
        self,
        Repository,
    },
    crate::kernel::db::DB,
    std::{
        sync::Arc,
        time::Duration,
    },
};

pub mod cache_auction_status;
pub mod close_auction;
pub mod conclude_auctions;
pub mod create_auction;
pub mod get_auction_by_id;
pub mod get_auctions;
pub mod get_cached_auction_status;
pub mod verification;
pub mod workers;

#[derive(Clone, Debug)]
pub struct Config {
    /// How often the close sweep runs, measured from the completion of the
    /// previous sweep.
    pub auction_close_interval: Duration,
    /// How long an auction accepts bids after it opens.
    pub auction_max_duration:   Duration,
}

pub struct ServiceInner {
    config: Config,
    repo:   Arc<Repository>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(db: DB, config: Config) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(repository::Repository::new(db)),
        }))
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::auction::repository::MockDatabase,
    };

    impl Service {
        pub fn new_with_mocks(db: MockDatabase, config: Config) -> Self {
            Self(Arc::new(ServiceInner {
                config,
                repo: Arc::new(Repository::new(db)),
            }))
        }
    }
}
