use {
    super::repository::{
        self,
        Repository,
    },
    crate::{
        auction,
        kernel::db::DB,
    },
    std::{
        sync::Arc,
        time::Duration,
    },
};

pub mod get_winning_bid;
pub mod handle_bids;

#[derive(Clone, Debug)]
pub struct Config {
    /// How long an auction accepts bids after it opens. Used to compute the
    /// close deadline on a cache miss; must match the lifecycle manager's
    /// value so both paths agree on when an auction expires.
    pub auction_max_duration: Duration,
}

pub struct ServiceInner {
    config:          Config,
    repo:            Arc<Repository>,
    auction_service: auction::service::Service,
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
    pub fn new(db: DB, auction_service: auction::service::Service, config: Config) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(repository::Repository::new(db)),
            auction_service,
        }))
    }
}
