#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        auction::entities::AuctionId,
        bid::entities,
        kernel::db::DB,
    },
    axum::async_trait,
    sqlx::FromRow,
    time::{
        PrimitiveDateTime,
        UtcOffset,
    },
    uuid::Uuid,
};

#[derive(Clone, Debug, FromRow)]
pub struct Bid {
    pub id:            Uuid,
    pub auction_id:    Uuid,
    pub user_id:       String,
    pub amount:        f64,
    pub creation_time: PrimitiveDateTime,
}

impl Bid {
    pub fn new(bid: &entities::Bid) -> Self {
        Self {
            id:            bid.id,
            auction_id:    bid.auction_id,
            user_id:       bid.user_id.clone(),
            amount:        bid.amount,
            creation_time: PrimitiveDateTime::new(bid.creation_time.date(), bid.creation_time.time()),
        }
    }

    pub fn get_entity(&self) -> entities::Bid {
        entities::Bid {
            id:            self.id,
            auction_id:    self.auction_id,
            user_id:       self.user_id.clone(),
            amount:        self.amount,
            creation_time: self.creation_time.assume_offset(UtcOffset::UTC),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Send + Sync + 'static {
    async fn add_bid(&self, bid: &Bid) -> Result<(), RestError>;
    async fn get_winning_bid(&self, auction_id: AuctionId) -> Result<Option<Bid>, RestError>;
}

#[async_trait]
impl Database for DB {
    async fn add_bid(&self, bid: &Bid) -> Result<(), RestError> {
        sqlx::query(
            "INSERT INTO bid (id, auction_id, user_id, amount, creation_time) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(bid.id)
        .bind(bid.auction_id)
        .bind(&bid.user_id)
        .bind(bid.amount)
        .bind(bid.creation_time)
        .execute(self)
        .await
        .map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                bid_id = bid.id.to_string(),
                auction_id = bid.auction_id.to_string(),
                "DB: Failed to insert bid"
            );
            RestError::TemporarilyUnavailable
        })?;
        Ok(())
    }

    async fn get_winning_bid(&self, auction_id: AuctionId) -> Result<Option<Bid>, RestError> {
        sqlx::query_as("SELECT * FROM bid WHERE auction_id = $1 ORDER BY amount DESC LIMIT 1")
            .bind(auction_id)
            .fetch_optional(self)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction_id.to_string(),
                    "DB: Failed to fetch winning bid"
                );
                RestError::TemporarilyUnavailable
            })
    }
}
