use {
    crate::auction::entities::AuctionId,
    std::collections::HashMap,
    time::OffsetDateTime,
    tokio::sync::RwLock,
};

mod add_bid;
mod get_in_memory_auction_deadline;
mod get_winning_bid;
mod models;
mod set_in_memory_auction_deadline;

pub use models::*;

/// Computed close deadlines (open time + max duration), keyed by auction id.
/// A deadline never changes once computed, so entries are written once and
/// never invalidated.
#[derive(Default)]
pub struct InMemoryStore {
    pub auction_deadlines: RwLock<HashMap<AuctionId, OffsetDateTime>>,
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
