use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities::AuctionId,
        bid::entities,
    },
};

impl Repository {
    pub async fn get_winning_bid(
        &self,
        auction_id: AuctionId,
    ) -> Result<Option<entities::Bid>, RestError> {
        let bid = self.db.get_winning_bid(auction_id).await?;
        Ok(bid.map(|bid| bid.get_entity()))
    }
}
