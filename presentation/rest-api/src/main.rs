use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use business::application::cart::session::hydrate_shared;
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Wires the rental cart and serves it over HTTP:
/// - config/: Environment-driven configuration (server, CORS, storage, catalog)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.storage, &config.catalog).await?;

    // 5. Restore the stored cart in the background; requests are served meanwhile
    let cart = container.cart.clone();
    tokio::spawn(async move { hydrate_shared(&cart).await });

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
