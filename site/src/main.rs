use std::sync::Arc;

use clinic_core::HttpStore;
use clinic_site::{config::SiteConfig, router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Serve the clinic site.
///
/// # Environment Variables
/// - `SITE_ADDR`: listen address (default: "127.0.0.1:8080")
/// - `DATA_SERVICE_URL`: base URL of the hosted data service
///   (default: "http://127.0.0.1:3000")
/// - `RUST_LOG`: tracing filter (default: "clinic_site=info,clinic_core=info")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_site=info,clinic_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env()?;
    let store = HttpStore::new(config.data_service_url());
    let app = router(AppState::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(
        addr = %config.listen_addr(),
        data_service = %config.data_service_url(),
        "clinic site listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
