use {
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::time::Duration,
};

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    #[command(flatten)]
    pub server: ServerOptions,

    #[command(flatten)]
    pub auction: AuctionOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Server Options")]
#[group(id = "Server")]
pub struct ServerOptions {
    /// Address and port the server will bind to.
    #[arg(long = "listen-addr")]
    #[arg(env = "LISTEN_ADDR")]
    #[arg(default_value = "127.0.0.1:9000")]
    pub listen_addr: String,

    /// URL of the Postgres database holding the auction and bid records.
    #[arg(long = "database-url")]
    #[arg(env = "DATABASE_URL")]
    pub database_url: String,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Auction Options")]
#[group(id = "Auction")]
pub struct AuctionOptions {
    /// How often the background sweep checks for expired auctions,
    /// as a duration string such as "1m" or "30s".
    #[arg(long = "auction-close-interval")]
    #[arg(env = "AUCTION_CLOSE_INTERVAL")]
    pub close_interval: Option<String>,

    /// How long an auction accepts bids after it opens,
    /// as a duration string such as "5m" or "1h".
    #[arg(long = "auction-max-duration")]
    #[arg(env = "AUCTION_MAX_DURATION")]
    pub max_duration: Option<String>,
}

pub const DEFAULT_AUCTION_CLOSE_INTERVAL: Duration = Duration::from_secs(60);
pub const DEFAULT_AUCTION_MAX_DURATION: Duration = Duration::from_secs(5 * 60);

impl AuctionOptions {
    pub fn close_interval(&self) -> Duration {
        parse_duration_or(
            self.close_interval.as_deref(),
            DEFAULT_AUCTION_CLOSE_INTERVAL,
        )
    }

    pub fn max_duration(&self) -> Duration {
        parse_duration_or(self.max_duration.as_deref(), DEFAULT_AUCTION_MAX_DURATION)
    }
}

/// Parse a duration string, falling back to the default when the value is
/// absent or unparseable. A bad value must not abort startup.
fn parse_duration_or(raw: Option<&str>, default: Duration) -> Duration {
    match raw {
        None => default,
        Some(raw) => match humantime::parse_duration(raw) {
            Ok(duration) => duration,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    value = raw,
                    "Failed to parse duration, falling back to default"
                );
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::time::Duration,
    };

    #[test]
    fn test_parse_duration() {
        assert_eq!(
            parse_duration_or(Some("90s"), DEFAULT_AUCTION_CLOSE_INTERVAL),
            Duration::from_secs(90)
        );
        assert_eq!(
            parse_duration_or(Some("2m"), DEFAULT_AUCTION_CLOSE_INTERVAL),
            Duration::from_secs(120)
        );
    }

    #[test]
    fn test_parse_duration_falls_back_on_garbage() {
        assert_eq!(
            parse_duration_or(Some("not-a-duration"), DEFAULT_AUCTION_MAX_DURATION),
            DEFAULT_AUCTION_MAX_DURATION
        );
    }

    #[test]
    fn test_parse_duration_falls_back_on_absence() {
        assert_eq!(
            parse_duration_or(None, DEFAULT_AUCTION_MAX_DURATION),
            DEFAULT_AUCTION_MAX_DURATION
        );
    }
}
