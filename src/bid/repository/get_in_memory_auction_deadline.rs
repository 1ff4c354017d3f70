use {
    super::Repository,
    crate::auction::entities::AuctionId,
    time::OffsetDateTime,
};

impl Repository {
    pub async fn get_in_memory_auction_deadline(
        &self,
        auction_id: AuctionId,
    ) -> Option<OffsetDateTime> {
        self.in_memory_store
            .auction_deadlines
            .read()
            .await
            .get(&auction_id)
            .copied()
    }
}
