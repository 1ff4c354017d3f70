use {
    crate::{
        api,
        auction,
        bid,
        config::RunOptions,
        state::ServerState,
    },
    anyhow::anyhow,
    futures::future::join_all,
    sqlx::postgres::PgPoolOptions,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
};

const DATABASE_MAX_CONNECTIONS: u32 = 10;

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let pool = PgPoolOptions::new()
        .max_connections(DATABASE_MAX_CONNECTIONS)
        .connect(&run_options.server.database_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to database: {:?}", err))?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|err| anyhow!("Failed to run migrations: {:?}", err))?;

    let auction_service = auction::service::Service::new(
        pool.clone(),
        auction::service::Config {
            auction_close_interval: run_options.auction.close_interval(),
            auction_max_duration:   run_options.auction.max_duration(),
        },
    );
    let bid_service = bid::service::Service::new(
        pool,
        auction_service.clone(),
        bid::service::Config {
            auction_max_duration: run_options.auction.max_duration(),
        },
    );
    let state = Arc::new(ServerState {
        auction_service: auction_service.clone(),
        bid_service,
    });

    let close_loop = tokio::spawn(async move { auction_service.run_auction_close_loop().await });
    let server_loop = tokio::spawn(api::start_api(run_options, state));
    join_all(vec![close_loop, server_loop]).await;
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
//
// NOTE: A more idiomatic approach would be to use a tokio::sync::broadcast channel, and to send a
// shutdown signal to all running tasks. However, this is a bit more complicated to implement and
// we don't rely on global state for anything else.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
