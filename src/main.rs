//! Server entry point.
//!
//! Boot order matters here: configuration and the asset manifest are read
//! before the listener binds, so a bad deployment (missing vendor/client
//! bundles, malformed locale list) fails the process instead of failing
//! every request.

use sitekit::assets::AssetManifest;
use sitekit::config::Config;
use sitekit::intl::select_source;
use sitekit::server::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::from_env()?;
    let assets = AssetManifest::load(&config.assets_manifest)?;
    let source = select_source(&config);

    let port = config.port;
    let state = AppState::new(config, assets, source);
    let app = create_app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("The server is running at http://localhost:{}/", port);
    axum::serve(listener, app).await?;

    Ok(())
}
