use {
    super::Service,
    crate::auction::entities,
};

impl Service {
    pub async fn cache_auction_status(
        &self,
        auction_id: entities::AuctionId,
        status: entities::AuctionStatus,
    ) {
        self.repo
            .set_in_memory_auction_status(auction_id, status)
            .await;
    }
}
