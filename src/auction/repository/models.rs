#[cfg(test)]
use mockall::automock;
use {
    super::entities,
    crate::{
        api::RestError,
        kernel::db::DB,
    },
    axum::async_trait,
    sqlx::{
        FromRow,
        QueryBuilder,
    },
    time::{
        PrimitiveDateTime,
        UtcOffset,
    },
    uuid::Uuid,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "auction_status", rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "product_condition", rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Active => Self::Active,
            entities::AuctionStatus::Completed => Self::Completed,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Active => Self::Active,
            AuctionStatus::Completed => Self::Completed,
        }
    }
}

impl From<entities::ProductCondition> for ProductCondition {
    fn from(condition: entities::ProductCondition) -> Self {
        match condition {
            entities::ProductCondition::New => Self::New,
            entities::ProductCondition::Used => Self::Used,
            entities::ProductCondition::Refurbished => Self::Refurbished,
        }
    }
}

impl From<ProductCondition> for entities::ProductCondition {
    fn from(condition: ProductCondition) -> Self {
        match condition {
            ProductCondition::New => Self::New,
            ProductCondition::Used => Self::Used,
            ProductCondition::Refurbished => Self::Refurbished,
        }
    }
}

#[derive(Clone, Debug, FromRow)]
pub struct Auction {
    pub id:            Uuid,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     ProductCondition,
    pub status:        AuctionStatus,
    pub creation_time: PrimitiveDateTime,
}

impl Auction {
    pub fn new(auction: &entities::Auction) -> Self {
        Self {
            id:            auction.id,
            product_name:  auction.product_name.clone(),
            category:      auction.category.clone(),
            description:   auction.description.clone(),
            condition:     auction.condition.into(),
            status:        auction.status.into(),
            creation_time: PrimitiveDateTime::new(
                auction.creation_time.date(),
                auction.creation_time.time(),
            ),
        }
    }

    pub fn get_entity(&self) -> entities::Auction {
        entities::Auction {
            id:            self.id,
            product_name:  self.product_name.clone(),
            category:      self.category.clone(),
            description:   self.description.clone(),
            condition:     self.condition.into(),
            status:        self.status.into(),
            creation_time: self.creation_time.assume_offset(UtcOffset::UTC),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Send + Sync + 'static {
    async fn add_auction(&self, auction: &Auction) -> Result<(), RestError>;
    async fn get_auction(&self, auction_id: entities::AuctionId) -> Result<Auction, RestError>;
    async fn get_auctions(
        &self,
        status: Option<AuctionStatus>,
        category: Option<String>,
        product_name: Option<String>,
    ) -> Result<Vec<Auction>, RestError>;
    async fn close_auction(&self, auction_id: entities::AuctionId) -> Result<(), RestError>;
}

#[async_trait]
impl Database for DB {
    async fn add_auction(&self, auction: &Auction) -> Result<(), RestError> {
        sqlx::query(
            "INSERT INTO auction (id, product_name, category, description, condition, status, creation_time) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(auction.id)
        .bind(&auction.product_name)
        .bind(&auction.category)
        .bind(&auction.description)
        .bind(auction.condition)
        .bind(auction.status)
        .bind(auction.creation_time)
        .execute(self)
        .await
        .map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                auction_id = auction.id.to_string(),
                "DB: Failed to insert auction"
            );
            RestError::TemporarilyUnavailable
        })?;
        Ok(())
    }

    async fn get_auction(&self, auction_id: entities::AuctionId) -> Result<Auction, RestError> {
        sqlx::query_as("SELECT * FROM auction WHERE id = $1")
            .bind(auction_id)
            .fetch_one(self)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RestError::AuctionNotFound,
                _ => {
                    tracing::error!(
                        error = e.to_string(),
                        auction_id = auction_id.to_string(),
                        "DB: Failed to get auction"
                    );
                    RestError::TemporarilyUnavailable
                }
            })
    }

    async fn get_auctions(
        &self,
        status: Option<AuctionStatus>,
        category: Option<String>,
        product_name: Option<String>,
    ) -> Result<Vec<Auction>, RestError> {
        let mut query = QueryBuilder::new("SELECT * FROM auction WHERE 1 = 1");
        if let Some(status) = status {
            query.push(" AND status = ");
            query.push_bind(status);
        }
        if let Some(category) = category.clone() {
            query.push(" AND category = ");
            query.push_bind(category);
        }
        if let Some(product_name) = product_name.clone() {
            query.push(" AND product_name = ");
            query.push_bind(product_name);
        }
        query.push(" ORDER BY creation_time DESC");
        query.build_query_as().fetch_all(self).await.map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                status = ?status,
                category = ?category,
                product_name = ?product_name,
                "DB: Failed to fetch auctions"
            );
            RestError::TemporarilyUnavailable
        })
    }

    async fn close_auction(&self, auction_id: entities::AuctionId) -> Result<(), RestError> {
        let result = sqlx::query("UPDATE auction SET status = $1 WHERE id = $2")
            .bind(AuctionStatus::Completed)
            .bind(auction_id)
            .execute(self)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = auction_id.to_string(),
                    "DB: Failed to close auction"
                );
                RestError::TemporarilyUnavailable
            })?;
        if result.rows_affected() == 0 {
            return Err(RestError::AuctionNotFound);
        }
        Ok(())
    }
}
