use {
    super::Service,
    crate::{
        api::RestError,
        auction::entities,
    },
};

pub struct CreateAuctionInput {
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    entities::ProductCondition,
}

impl Service {
    #[tracing::instrument(skip_all, fields(auction_id))]
    pub async fn create_auction(
        &self,
        input: CreateAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        self.verify_create_auction(&input)?;
        let auction = entities::Auction::new(
            input.product_name,
            input.category,
            input.description,
            input.condition,
        );
        tracing::Span::current().record("auction_id", auction.id.to_string());
        self.repo.add_auction(auction).await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to add auction");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::{
            entities::{
                AuctionStatus,
                ProductCondition,
            },
            repository::MockDatabase,
            service::Config,
        },
        std::time::Duration,
    };

    fn config() -> Config {
        Config {
            auction_close_interval: Duration::from_secs(60),
            auction_max_duration:   Duration::from_secs(300),
        }
    }

    fn valid_input() -> CreateAuctionInput {
        CreateAuctionInput {
            product_name: "Record player".to_string(),
            category:     "Audio".to_string(),
            description:  "Belt drive turntable, recently serviced".to_string(),
            condition:    ProductCondition::Refurbished,
        }
    }

    #[tokio::test]
    async fn test_create_auction_persists_an_active_auction() {
        let mut db = MockDatabase::new();
        db.expect_add_auction()
            .times(1)
            .withf(|auction| {
                auction.product_name == "Record player"
                    && auction.status == crate::auction::repository::AuctionStatus::Active
            })
            .returning(|_| Ok(()));

        let service = Service::new_with_mocks(db, config());
        let auction = service.create_auction(valid_input()).await.unwrap();
        assert_eq!(auction.status, AuctionStatus::Active);
        assert_eq!(auction.condition, ProductCondition::Refurbished);
    }

    #[tokio::test]
    async fn test_create_auction_rejects_invalid_input_without_touching_the_store() {
        let db = MockDatabase::new();
        let service = Service::new_with_mocks(db, config());

        let mut input = valid_input();
        input.description = "short".to_string();
        assert!(matches!(
            service.create_auction(input).await,
            Err(RestError::BadParameters(_))
        ));
    }

    #[tokio::test]
    async fn test_create_auction_surfaces_store_failure() {
        let mut db = MockDatabase::new();
        db.expect_add_auction()
            .times(1)
            .returning(|_| Err(RestError::TemporarilyUnavailable));

        let service = Service::new_with_mocks(db, config());
        assert!(matches!(
            service.create_auction(valid_input()).await,
            Err(RestError::TemporarilyUnavailable)
        ));
    }
}
