use {
    super::Service,
    crate::server::{
        EXIT_CHECK_INTERVAL,
        SHOULD_EXIT,
    },
    anyhow::Result,
    std::sync::atomic::Ordering,
};

impl Service {
    /// Background close sweep. The wait is rearmed after each sweep finishes,
    /// so a slow sweep delays the next tick by its own duration and ticks
    /// never overlap. Runs until process shutdown.
    pub async fn run_auction_close_loop(&self) -> Result<()> {
        tracing::info!(
            interval = ?self.config.auction_close_interval,
            max_duration = ?self.config.auction_max_duration,
            "Starting auction close loop..."
        );
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);
        'sweep: while !SHOULD_EXIT.load(Ordering::Acquire) {
            let rearm = tokio::time::sleep(self.config.auction_close_interval);
            tokio::pin!(rearm);
            loop {
                tokio::select! {
                    _ = &mut rearm => {
                        self.conclude_expired_auctions().await;
                        continue 'sweep;
                    }
                    _ = exit_check_interval.tick() => {
                        if SHOULD_EXIT.load(Ordering::Acquire) {
                            break 'sweep;
                        }
                    }
                }
            }
        }
        tracing::info!("Shutting down auction close loop...");
        Ok(())
    }
}
