use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct CloseAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Transition the auction to Completed. The transition is terminal;
    /// closing an already-Completed auction is a no-op success.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn close_auction(&self, input: CloseAuctionInput) -> Result<(), RestError> {
        self.repo.close_auction(input.auction_id).await
    }
}
