use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    /// Mark the auction Completed in the database and the status cache.
    ///
    /// The cache write lock is held across the store write so concurrent
    /// readers never observe a Completed entry for a closure that failed to
    /// persist. Closing an already-Completed auction re-affirms the terminal
    /// status and succeeds.
    pub async fn close_auction(&self, auction_id: entities::AuctionId) -> Result<(), RestError> {
        let mut statuses = self.in_memory_store.auction_statuses.write().await;
        self.db.close_auction(auction_id).await?;
        statuses.insert(auction_id, entities::AuctionStatus::Completed);
        Ok(())
    }
}
