use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct GetAuctionsInput {
    pub status:       Option<entities::AuctionStatus>,
    pub category:     Option<String>,
    pub product_name: Option<String>,
}

impl Service {
    pub async fn get_auctions(
        &self,
        input: GetAuctionsInput,
    ) -> Result<Vec<entities::Auction>, RestError> {
        self.repo
            .get_auctions(input.status, input.category, input.product_name)
            .await
    }
}
