use std::sync::Arc;

use anyhow::Result;
use commentdeck_api::ApiClient;
use commentdeck_core::config::SidebarConfig;
use commentdeck_sidebar::{SidebarContext, SidebarView, SitesView};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("commentdeck=info,warn")),
        )
        .init();

    tracing::info!("Starting CommentDeck v{}", commentdeck_core::VERSION);

    // Load configuration
    let config = SidebarConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        SidebarConfig::default()
    });

    tracing::info!("Using comment server at {}", config.server_url);

    let api = Arc::new(ApiClient::new(&config));
    let ctx = SidebarContext::new(api);

    let view = SitesView::new();
    view.mount(&ctx).await?;

    if let Some(list) = view.site_list() {
        tracing::info!("Fetched {} sites", list.sites().len());
        for site in list.sites() {
            println!("{}", serde_json::to_string(&site)?);
        }
    }

    Ok(())
}
