use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    pub async fn get_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<entities::Auction, RestError> {
        let auction = self.db.get_auction(auction_id).await?;
        Ok(auction.get_entity())
    }
}
