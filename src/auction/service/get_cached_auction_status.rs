use {
    super::Service,
    crate::auction::entities,
};

impl Service {
    /// Last-known status for the auction, if the cache holds one. May be
    /// stale; callers treat the database as the source of truth on a miss.
    pub async fn get_cached_auction_status(
        &self,
        auction_id: entities::AuctionId,
    ) -> Option<entities::AuctionStatus> {
        self.repo.get_in_memory_auction_status(auction_id).await
    }
}
