use std::sync::Arc;

use axum::Router;
use datastore::SampleCatalog;
use tracing::{debug, error, info, warn};
use video_service::SearchService;
use youtube_client::{UpstreamError, YouTubeClient};

use crate::config::{AppConfig, DEFAULT_SECRET_KEY, Environment};

/// Build the search service backed by the configured YouTube endpoint.
///
/// # Errors
/// - `UpstreamError::Request` - The HTTP client for the search provider could not be built
pub fn build_search_service(config: &AppConfig) -> Result<SearchService, UpstreamError> {
    let client = YouTubeClient::with_config(
        config.youtube_search_url.clone(),
        config.youtube_timeout,
    )?;
    debug!(
        search_url = client.search_url(),
        timeout = ?config.youtube_timeout,
        "YouTube client ready"
    );

    Ok(SearchService::new(
        config.youtube_api_key.clone(),
        Arc::new(client),
        Arc::new(SampleCatalog::new()),
    ))
}

/// Assemble every route of the application from one configuration value.
///
/// # Errors
/// - `UpstreamError::Request` - The HTTP client for the search provider could not be built
pub fn build_router(config: &AppConfig) -> Result<Router, UpstreamError> {
    Ok(router_with(build_search_service(config)?))
}

fn router_with(search_service: SearchService) -> Router {
    Router::new()
        .merge(page_service::create_router())
        .merge(video_service::create_router(search_service))
        // Path only: query strings carry user search text.
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
/// - Binding the listener fails, or the HTTP client cannot be built
pub async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.environment == Environment::Production && config.secret_key == DEFAULT_SECRET_KEY {
        warn!("SECRET_KEY is unset; using the built-in default in production");
    }
    let search_service = build_search_service(&config)?;
    if !search_service.has_api_key() {
        info!("YOUTUBE_API_KEY not configured; video search will serve sample results");
    }

    let app = router_with(search_service);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!(
        environment = config.environment.name(),
        "Server listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!(error = %err, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
