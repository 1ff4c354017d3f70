use {
    super::Service,
    crate::{
        auction::{
            entities::AuctionStatus,
            service::get_auction_by_id::GetAuctionByIdInput,
        },
        bid::entities,
    },
    futures::future::join_all,
};

pub struct HandleBidsInput {
    pub bids: Vec<entities::BidCreate>,
}

impl Service {
    /// Validate and persist a batch of bids, one concurrent unit per bid.
    /// Returns once every bid has been processed. Best-effort: late bids are
    /// dropped silently and store failures only cost the affected bid.
    pub async fn handle_bids(&self, input: HandleBidsInput) {
        join_all(input.bids.into_iter().map(|bid| self.process_bid(bid))).await;
    }

    async fn process_bid(&self, bid_create: entities::BidCreate) {
        if bid_create.amount <= 0.0 {
            tracing::debug!(
                auction_id = ?bid_create.auction_id,
                "Dropping bid with non-positive amount"
            );
            return;
        }

        // Two independent lock acquisitions, each released before any store
        // call.
        let cached_status = self
            .auction_service
            .get_cached_auction_status(bid_create.auction_id)
            .await;
        let cached_deadline = self
            .repo
            .get_in_memory_auction_deadline(bid_create.auction_id)
            .await;

        if let (Some(status), Some(deadline)) = (cached_status, cached_deadline) {
            if status == AuctionStatus::Completed || bid_create.creation_time >= deadline {
                tracing::debug!(
                    auction_id = ?bid_create.auction_id,
                    "Dropping bid for closed or expired auction"
                );
                return;
            }
            self.insert_bid(bid_create).await;
            return;
        }

        // Cache miss: the database is the source of truth. Refresh both
        // caches before deciding.
        let auction = match self
            .auction_service
            .get_auction_by_id(GetAuctionByIdInput {
                auction_id: bid_create.auction_id,
            })
            .await
        {
            Ok(auction) => auction,
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    auction_id = ?bid_create.auction_id,
                    "Failed to find auction for bid"
                );
                return;
            }
        };
        if auction.status == AuctionStatus::Completed {
            return;
        }

        self.auction_service
            .cache_auction_status(auction.id, auction.status)
            .await;
        let deadline = auction.creation_time + self.config.auction_max_duration;
        self.repo
            .set_in_memory_auction_deadline(auction.id, deadline)
            .await;

        if bid_create.creation_time >= deadline {
            tracing::debug!(
                auction_id = ?bid_create.auction_id,
                "Dropping bid past the computed close deadline"
            );
            return;
        }
        self.insert_bid(bid_create).await;
    }

    async fn insert_bid(&self, bid_create: entities::BidCreate) {
        let bid = entities::Bid::new(bid_create);
        if let Err(err) = self.repo.add_bid(bid).await {
            tracing::error!(error = ?err, "Failed to insert bid");
        }
    }
}
