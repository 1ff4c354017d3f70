use {
    crate::{
        config::RunOptions,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::ServerState,
    },
    anyhow::Result,
    axum::{
        http::StatusCode,
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            post,
        },
        Json,
        Router,
    },
    clap::crate_version,
    serde::Serialize,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::{
        OpenApi,
        ToResponse,
        ToSchema,
    },
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

pub mod auction;
pub mod bid;

async fn root() -> String {
    format!("Timed Auction Server API {}", crate_version!())
}

#[derive(Clone, Debug)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The auction was not found
    AuctionNotFound,
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::AuctionNotFound => (
                StatusCode::NOT_FOUND,
                "Auction with the specified id was not found".to_string(),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

#[derive(ToResponse, ToSchema, Serialize)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    error: String,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

pub async fn start_api(run_options: RunOptions, state: Arc<ServerState>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
        paths(
            auction::post_auction,
            auction::get_auctions,
            auction::get_auction,
            auction::close_auction,
            auction::get_winning_bid,
            bid::post_bids,
        ),
        components(
            schemas(
                auction::CreateAuction,
                auction::Auction,
                auction::WinningBid,
                bid::Bid,
                bid::BidDetails,
                bid::BidsResult,
                ErrorBodyResponse,
                crate::auction::entities::AuctionStatus,
                crate::auction::entities::ProductCondition,
            ),
            responses(ErrorBodyResponse),
        ),
        tags(
            (name = "Timed Auction Server", description = "The auction server manages time-bounded product listings. \
            It accepts bids while an auction is open and determines the winning bid once the auction closes.")
        )
    )]
    struct ApiDoc;

    let auction_routes = Router::new()
        .route("/", post(auction::post_auction).get(auction::get_auctions))
        .route("/:auction_id", get(auction::get_auction))
        .route("/:auction_id/close", post(auction::close_auction))
        .route("/:auction_id/winning_bid", get(auction::get_winning_bid));
    let bid_routes = Router::new().route("/", post(bid::post_bids));

    let v1_routes = Router::new().nest(
        "/v1",
        Router::new()
            .nest("/auctions", auction_routes)
            .nest("/bids", bid_routes),
    );

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url("/docs", ApiDoc::openapi()))
        .merge(v1_routes)
        .route("/", get(root))
        .route("/live", get(live))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!(
        listen_addr = %run_options.server.listen_addr,
        "Starting API server..."
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down API server...");
        })
        .await?;
    Ok(())
}
