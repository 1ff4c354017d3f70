use {
    super::{
        create_auction::CreateAuctionInput,
        Service,
    },
    crate::api::RestError,
};

pub const CATEGORY_MIN_LEN: usize = 2;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 200;

impl Service {
    pub fn verify_create_auction(&self, input: &CreateAuctionInput) -> Result<(), RestError> {
        if input.product_name.trim().is_empty() {
            return Err(RestError::BadParameters(
                "product name must not be empty".to_string(),
            ));
        }
        if input.category.trim().chars().count() < CATEGORY_MIN_LEN {
            return Err(RestError::BadParameters(format!(
                "category must be at least {} characters long",
                CATEGORY_MIN_LEN
            )));
        }
        let description_len = input.description.trim().chars().count();
        if !(DESCRIPTION_MIN_LEN..=DESCRIPTION_MAX_LEN).contains(&description_len) {
            return Err(RestError::BadParameters(format!(
                "description must be between {} and {} characters long",
                DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::{
                entities::ProductCondition,
                repository::MockDatabase,
                service::Config,
            },
        },
        std::time::Duration,
    };

    fn service() -> Service {
        Service::new_with_mocks(
            MockDatabase::new(),
            Config {
                auction_close_interval: Duration::from_secs(60),
                auction_max_duration:   Duration::from_secs(300),
            },
        )
    }

    fn valid_input() -> CreateAuctionInput {
        CreateAuctionInput {
            product_name: "Mechanical keyboard".to_string(),
            category:     "Electronics".to_string(),
            description:  "Tenkeyless board with brown switches".to_string(),
            condition:    ProductCondition::Used,
        }
    }

    #[test]
    fn test_verify_create_auction_accepts_valid_input() {
        assert!(service().verify_create_auction(&valid_input()).is_ok());
    }

    #[test]
    fn test_verify_create_auction_rejects_empty_product_name() {
        let mut input = valid_input();
        input.product_name = "   ".to_string();
        assert!(matches!(
            service().verify_create_auction(&input),
            Err(RestError::BadParameters(_))
        ));
    }

    #[test]
    fn test_verify_create_auction_rejects_short_category() {
        let mut input = valid_input();
        input.category = "a".to_string();
        assert!(matches!(
            service().verify_create_auction(&input),
            Err(RestError::BadParameters(_))
        ));
    }

    #[test]
    fn test_verify_create_auction_rejects_short_description() {
        let mut input = valid_input();
        input.description = "short".to_string();
        assert!(matches!(
            service().verify_create_auction(&input),
            Err(RestError::BadParameters(_))
        ));
    }

    #[test]
    fn test_verify_create_auction_rejects_long_description() {
        let mut input = valid_input();
        input.description = "x".repeat(DESCRIPTION_MAX_LEN + 1);
        assert!(matches!(
            service().verify_create_auction(&input),
            Err(RestError::BadParameters(_))
        ));
    }

    #[test]
    fn test_verify_create_auction_accepts_boundary_descriptions() {
        let service = service();
        let mut input = valid_input();
        input.description = "x".repeat(DESCRIPTION_MIN_LEN);
        assert!(service.verify_create_auction(&input).is_ok());
        input.description = "x".repeat(DESCRIPTION_MAX_LEN);
        assert!(service.verify_create_auction(&input).is_ok());
    }
}
