use {
    super::{
        models,
        Repository,
    },
    crate::{
        api::RestError,
        bid::entities,
    },
};

impl Repository {
    pub async fn add_bid(&self, bid: entities::Bid) -> Result<entities::Bid, RestError> {
        self.db.add_bid(&models::Bid::new(&bid)).await?;
        Ok(bid)
    }
}
