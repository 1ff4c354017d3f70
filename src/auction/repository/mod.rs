use {
    super::entities,
    std::collections::HashMap,
    tokio::sync::RwLock,
};

mod add_auction;
mod close_auction;
mod get_auction;
mod get_auctions;
mod get_in_memory_auction_status;
mod models;
mod set_in_memory_auction_status;

pub use models::*;

/// Last-known auction statuses, keyed by auction id. Entries may be stale
/// relative to the database; the bid intake path refreshes them on a miss
/// and the close path updates them after a successful store write.
#[derive(Default)]
pub struct InMemoryStore {
    pub auction_statuses: RwLock<HashMap<entities::AuctionId, entities::AuctionStatus>>,
}

pub struct Repository {
    pub in_memory_store: InMemoryStore,
    pub db:              Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self {
            in_memory_store: InMemoryStore::default(),
            db:              Box::new(db),
        }
    }
}
