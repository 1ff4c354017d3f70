use {
    serde::{
        Deserialize,
        Serialize,
    },
    time::OffsetDateTime,
    utoipa::ToSchema,
    uuid::Uuid,
};

pub type AuctionId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

/// A timed product listing. Opens Active and only ever transitions to
/// Completed, either by an administrative close or by the close sweep once
/// the configured maximum duration has elapsed.
#[derive(Clone, Debug)]
pub struct Auction {
    pub id:            AuctionId,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     ProductCondition,
    pub status:        AuctionStatus,
    pub creation_time: OffsetDateTime,
}

impl Auction {
    pub fn new(
        product_name: String,
        category: String,
        description: String,
        condition: ProductCondition,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name,
            category,
            description,
            condition,
            status: AuctionStatus::Active,
            creation_time: OffsetDateTime::now_utc(),
        }
    }
}
