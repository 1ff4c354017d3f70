use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn set_in_memory_auction_status(
        &self,
        auction_id: entities::AuctionId,
        status: entities::AuctionStatus,
    ) {
        self.in_memory_store
            .auction_statuses
            .write()
            .await
            .insert(auction_id, status);
    }
}
