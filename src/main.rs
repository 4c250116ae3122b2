use employee_store::config::Config;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel
    );

    let handle = employee_store::db::spawn(&cfg.database_url).await?;

    match handle.find_one().await {
        Ok(Some(first)) => info!(?first, "first stored employee"),
        Ok(None) => info!("employee table is empty"),
        Err(e) => warn!(error = %e, "startup probe failed"),
    }

    let listener = match TcpListener::bind(cfg.listen_addr.as_str()).await {
        Ok(listener) => listener,
        Err(e) => {
            handle.stop().await?;
            return Err(e.into());
        }
    };
    info!("HTTP server listening on {}", cfg.listen_addr);
    employee_store::router::serve_until(listener, handle, shutdown_signal()).await?;
    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
