use crate::{
    auction,
    bid,
};

/// Shared handle to the services backing the HTTP layer.
pub struct ServerState {
    pub auction_service: auction::service::Service,
    pub bid_service:     bid::service::Service,
}
