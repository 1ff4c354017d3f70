use {
    super::{
        close_auction::CloseAuctionInput,
        Service,
    },
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Service {
    /// One tick of the close sweep: close every Active auction whose maximum
    /// duration has elapsed. Failures are logged and skipped; the next tick
    /// retries them.
    pub async fn conclude_expired_auctions(&self) {
        let auctions = match self
            .repo
            .get_auctions(Some(entities::AuctionStatus::Active), None, None)
            .await
        {
            Ok(auctions) => auctions,
            Err(err) => {
                tracing::error!(error = ?err, "Failed to fetch active auctions for close sweep");
                return;
            }
        };

        let now = OffsetDateTime::now_utc();
        for auction in auctions {
            if now >= auction.creation_time + self.config.auction_max_duration {
                if let Err(err) = self
                    .close_auction(CloseAuctionInput {
                        auction_id: auction.id,
                    })
                    .await
                {
                    tracing::error!(
                        error = ?err,
                        auction_id = ?auction.id,
                        "Failed to close expired auction"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            api::RestError,
            auction::{
                repository::{
                    Auction as AuctionModel,
                    AuctionStatus as AuctionStatusModel,
                    MockDatabase,
                    ProductCondition as ProductConditionModel,
                },
                service::Config,
            },
        },
        mockall::predicate::eq,
        std::time::Duration,
        time::PrimitiveDateTime,
        uuid::Uuid,
    };

    fn config() -> Config {
        Config {
            auction_close_interval: Duration::from_secs(60),
            auction_max_duration:   Duration::from_secs(300),
        }
    }

    fn auction_model(id: Uuid, age: Duration) -> AuctionModel {
        let creation_time = OffsetDateTime::now_utc() - age;
        AuctionModel {
            id,
            product_name: "Camera lens".to_string(),
            category: "Photography".to_string(),
            description: "50mm prime lens with original packaging".to_string(),
            condition: ProductConditionModel::Used,
            status: AuctionStatusModel::Active,
            creation_time: PrimitiveDateTime::new(creation_time.date(), creation_time.time()),
        }
    }

    #[tokio::test]
    async fn test_sweep_closes_only_expired_auctions() {
        let expired_id = Uuid::new_v4();
        let fresh_id = Uuid::new_v4();
        let mut db = MockDatabase::new();
        db.expect_get_auctions().times(1).returning(move |_, _, _| {
            Ok(vec![
                auction_model(expired_id, Duration::from_secs(600)),
                auction_model(fresh_id, Duration::from_secs(30)),
            ])
        });
        db.expect_close_auction()
            .with(eq(expired_id))
            .times(1)
            .returning(|_| Ok(()));

        let service = Service::new_with_mocks(db, config());
        service.conclude_expired_auctions().await;
    }

    #[tokio::test]
    async fn test_sweep_survives_a_store_outage() {
        let mut db = MockDatabase::new();
        db.expect_get_auctions()
            .times(1)
            .returning(|_, _, _| Err(RestError::TemporarilyUnavailable));

        let service = Service::new_with_mocks(db, config());
        service.conclude_expired_auctions().await;
    }

    #[tokio::test]
    async fn test_sweep_continues_past_individual_close_failures() {
        let first_id = Uuid::new_v4();
        let second_id = Uuid::new_v4();
        let mut db = MockDatabase::new();
        db.expect_get_auctions().times(1).returning(move |_, _, _| {
            Ok(vec![
                auction_model(first_id, Duration::from_secs(600)),
                auction_model(second_id, Duration::from_secs(600)),
            ])
        });
        db.expect_close_auction()
            .times(2)
            .returning(move |auction_id| {
                if auction_id == first_id {
                    Err(RestError::TemporarilyUnavailable)
                } else {
                    Ok(())
                }
            });

        let service = Service::new_with_mocks(db, config());
        service.conclude_expired_auctions().await;
    }

    #[tokio::test]
    async fn test_sweep_with_zero_bids_still_completes_the_auction() {
        // An expired auction is closed by the sweep even if no bid ever
        // arrived for it.
        let auction_id = Uuid::new_v4();
        let mut db = MockDatabase::new();
        db.expect_get_auctions()
            .times(1)
            .returning(move |_, _, _| Ok(vec![auction_model(auction_id, Duration::from_secs(301))]));
        db.expect_close_auction()
            .with(eq(auction_id))
            .times(1)
            .returning(|_| Ok(()));

        let service = Service::new_with_mocks(db, config());
        service.conclude_expired_auctions().await;
    }
}
