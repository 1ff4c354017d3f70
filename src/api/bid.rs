use {
    crate::{
        api::{
            ErrorBodyResponse,
            RestError,
        },
        bid::{
            entities,
            service::handle_bids::HandleBidsInput,
        },
        state::ServerState,
    },
    axum::{
        extract::State,
        Json,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::sync::Arc,
    time::OffsetDateTime,
    utoipa::{
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct Bid {
    /// The id of the auction the bid is placed on.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: Uuid,
    /// The id of the bidding user.
    #[schema(example = "user-42")]
    pub user_id:    String,
    /// The offered amount. Must be positive.
    #[schema(example = 250.0)]
    pub amount:     f64,
}

#[derive(Serialize, ToResponse, ToSchema, Clone)]
pub struct BidDetails {
    /// The unique id of the accepted bid.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:            Uuid,
    #[schema(value_type = String)]
    pub auction_id:    Uuid,
    pub user_id:       String,
    pub amount:        f64,
    /// When the bid was submitted.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(example = "2026-08-25T12:00:00+00:00", value_type = String)]
    pub creation_time: OffsetDateTime,
}

impl From<entities::Bid> for BidDetails {
    fn from(bid: entities::Bid) -> Self {
        Self {
            id:            bid.id,
            auction_id:    bid.auction_id,
            user_id:       bid.user_id,
            amount:        bid.amount,
            creation_time: bid.creation_time,
        }
    }
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone)]
pub struct BidsResult {
    pub status: String,
}

/// Submit a batch of bids.
///
/// Each bid is validated against its auction independently; bids for closed
/// or expired auctions are dropped silently. The batch is accepted as a
/// whole and never reports per-bid outcomes.
#[utoipa::path(post, path = "/v1/bids", request_body = Vec<Bid>, responses(
    (status = 200, description = "Bids were accepted for processing", body = BidsResult,
    example = json!({"status": "OK"})),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_bids(
    State(state): State<Arc<ServerState>>,
    Json(bids): Json<Vec<Bid>>,
) -> Result<Json<BidsResult>, RestError> {
    let now = OffsetDateTime::now_utc();
    let bids = bids
        .into_iter()
        .map(|bid| entities::BidCreate {
            auction_id:    bid.auction_id,
            user_id:       bid.user_id,
            amount:        bid.amount,
            creation_time: now,
        })
        .collect();
    state.bid_service.handle_bids(HandleBidsInput { bids }).await;
    Ok(Json(BidsResult {
        status: "OK".to_string(),
    }))
}
