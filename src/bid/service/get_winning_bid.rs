use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities::AuctionId,
        bid::entities,
    },
};

pub struct GetWinningBidInput {
    pub auction_id: AuctionId,
}

impl Service {
    /// Highest bid recorded for the auction, if any bid was accepted.
    pub async fn get_winning_bid(
        &self,
        input: GetWinningBidInput,
    ) -> Result<Option<entities::Bid>, RestError> {
        self.repo.get_winning_bid(input.auction_id).await
    }
}
