use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_in_memory_auction_status(
        &self,
        auction_id: entities::AuctionId,
    ) -> Option<entities::AuctionStatus> {
        self.in_memory_store
            .auction_statuses
            .read()
            .await
            .get(&auction_id)
            .copied()
    }
}
