use {
    super::Repository,
    crate::auction::entities::AuctionId,
    time::OffsetDateTime,
};

impl Repository {
    pub async fn set_in_memory_auction_deadline(
        &self,
        auction_id: AuctionId,
        deadline: OffsetDateTime,
    ) {
        self.in_memory_store
            .auction_deadlines
            .write()
            .await
            .insert(auction_id, deadline);
    }
}
