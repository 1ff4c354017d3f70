use {
    super::Repository,
    crate::{
        api::RestError,
        auction::entities,
    },
};

impl Repository {
    pub async fn get_auctions(
        &self,
        status: Option<entities::AuctionStatus>,
        category: Option<String>,
        product_name: Option<String>,
    ) -> Result<Vec<entities::Auction>, RestError> {
        let auctions = self
            .db
            .get_auctions(status.map(Into::into), category, product_name)
            .await?;
        Ok(auctions.iter().map(|auction| auction.get_entity()).collect())
    }
}
