use {
    crate::{
        api::{
            ErrorBodyResponse,
            RestError,
        },
        auction::{
            entities,
            service::{
                close_auction::CloseAuctionInput,
                create_auction::CreateAuctionInput,
                get_auction_by_id::GetAuctionByIdInput,
                get_auctions::GetAuctionsInput,
            },
        },
        bid::service::get_winning_bid::GetWinningBidInput,
        state::ServerState,
    },
    axum::{
        extract::{
            Path,
            Query,
            State,
        },
        Json,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    std::sync::Arc,
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CreateAuction {
    /// Name of the product being auctioned.
    #[schema(example = "Mechanical keyboard")]
    pub product_name: String,
    /// Product category, at least 2 characters.
    #[schema(example = "Electronics")]
    pub category:     String,
    /// Product description, between 10 and 200 characters.
    #[schema(example = "Tenkeyless board with brown switches, lightly used")]
    pub description:  String,
    pub condition:    entities::ProductCondition,
}

#[derive(Serialize, Deserialize, ToResponse, ToSchema, Clone)]
pub struct Auction {
    /// The unique id of the auction.
    #[schema(example = "obo3ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:            Uuid,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     entities::ProductCondition,
    pub status:        entities::AuctionStatus,
    /// When the auction opened and started accepting bids.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(example = "2026-08-25T12:00:00+00:00", value_type = String)]
    pub creation_time: OffsetDateTime,
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        Self {
            id:            auction.id,
            product_name:  auction.product_name,
            category:      auction.category,
            description:   auction.description,
            condition:     auction.condition,
            status:        auction.status,
            creation_time: auction.creation_time,
        }
    }
}

#[derive(Serialize, ToResponse, ToSchema, Clone)]
pub struct WinningBid {
    pub auction: Auction,
    /// The highest accepted bid, absent when no bid was accepted.
    pub bid:     Option<super::bid::BidDetails>,
}

#[derive(Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetAuctionsQueryParams {
    /// Filter auctions by status.
    #[param(example = "active")]
    pub status:       Option<entities::AuctionStatus>,
    /// Filter auctions by category.
    #[param(example = "Electronics")]
    pub category:     Option<String>,
    /// Filter auctions by product name.
    #[param(example = "Mechanical keyboard")]
    pub product_name: Option<String>,
}

/// Open a new auction.
///
/// The auction starts Active and accepts bids until it is closed or its
/// maximum duration elapses.
#[utoipa::path(post, path = "/v1/auctions", request_body = CreateAuction, responses(
    (status = 200, description = "The created auction", body = Auction),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_auction(
    State(state): State<Arc<ServerState>>,
    Json(auction): Json<CreateAuction>,
) -> Result<Json<Auction>, RestError> {
    let auction = state
        .auction_service
        .create_auction(CreateAuctionInput {
            product_name: auction.product_name,
            category:     auction.category,
            description:  auction.description,
            condition:    auction.condition,
        })
        .await?;
    Ok(Json(auction.into()))
}

/// Query auctions, optionally filtered by status, category and product name.
#[utoipa::path(get, path = "/v1/auctions", params(GetAuctionsQueryParams), responses(
    (status = 200, description = "Auctions matching the filters", body = Vec<Auction>),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn get_auctions(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<GetAuctionsQueryParams>,
) -> Result<Json<Vec<Auction>>, RestError> {
    let auctions = state
        .auction_service
        .get_auctions(GetAuctionsInput {
            status:       params.status,
            category:     params.category,
            product_name: params.product_name,
        })
        .await?;
    Ok(Json(auctions.into_iter().map(Auction::from).collect()))
}

/// Query a specific auction by its id.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}",
    params(("auction_id" = String, description = "Auction id to query for")),
    responses(
    (status = 200, description = "The auction with the specified id", body = Auction),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn get_auction(
    State(state): State<Arc<ServerState>>,
    Path(auction_id): Path<Uuid>,
) -> Result<Json<Auction>, RestError> {
    let auction = state
        .auction_service
        .get_auction_by_id(GetAuctionByIdInput { auction_id })
        .await?;
    Ok(Json(auction.into()))
}

/// Close an auction, rejecting any further bids.
///
/// Closing an already closed auction has no effect.
#[utoipa::path(post, path = "/v1/auctions/{auction_id}/close",
    params(("auction_id" = String, description = "Auction id to close")),
    responses(
    (status = 200, description = "The closed auction", body = Auction),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn close_auction(
    State(state): State<Arc<ServerState>>,
    Path(auction_id): Path<Uuid>,
) -> Result<Json<Auction>, RestError> {
    state
        .auction_service
        .close_auction(CloseAuctionInput { auction_id })
        .await?;
    let auction = state
        .auction_service
        .get_auction_by_id(GetAuctionByIdInput { auction_id })
        .await?;
    Ok(Json(auction.into()))
}

/// Query the winning bid of an auction.
///
/// The winning bid is the highest bid accepted before the auction closed; it
/// is absent while no bid has been accepted.
#[utoipa::path(get, path = "/v1/auctions/{auction_id}/winning_bid",
    params(("auction_id" = String, description = "Auction id to query the winning bid for")),
    responses(
    (status = 200, description = "The auction and its winning bid so far", body = WinningBid),
    (status = 404, description = "Auction was not found", body = ErrorBodyResponse),
),)]
pub async fn get_winning_bid(
    State(state): State<Arc<ServerState>>,
    Path(auction_id): Path<Uuid>,
) -> Result<Json<WinningBid>, RestError> {
    let auction = state
        .auction_service
        .get_auction_by_id(GetAuctionByIdInput { auction_id })
        .await?;
    let bid = state
        .bid_service
        .get_winning_bid(GetWinningBidInput { auction_id })
        .await?;
    Ok(Json(WinningBid {
        auction: auction.into(),
        bid:     bid.map(Into::into),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auction_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&entities::AuctionStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&entities::ProductCondition::Refurbished).unwrap(),
            "\"refurbished\""
        );
    }

    #[test]
    fn test_auction_response_carries_rfc3339_timestamps() {
        let auction = Auction::from(entities::Auction::new(
            "Road bike".to_string(),
            "Sports".to_string(),
            "Aluminium frame road bike, size 56".to_string(),
            entities::ProductCondition::Used,
        ));
        let json = serde_json::to_value(&auction).unwrap();
        assert_eq!(json["status"], "active");
        assert!(json["creation_time"].as_str().unwrap().contains('T'));
    }
}
