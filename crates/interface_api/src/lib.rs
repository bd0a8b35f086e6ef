//! HTTP API Layer
//!
//! This crate provides the REST API for the receipt split service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for splitting and recording receipts
//! - **Middleware**: Request ids, tracing, request logging, timeouts, CORS
//! - **DTOs**: Request/Response data transfer objects
//! - **Adapters**: Implementations of the split record port
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{adapters::InMemorySplitRepository, create_router};
//!
//! let app = create_router(config, Arc::new(InMemorySplitRepository::new()));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod adapters;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use domain_split::SplitRepository;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, receipts};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub splits: Arc<dyn SplitRepository>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
/// * `splits` - Storage for recorded split records
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig, splits: Arc<dyn SplitRepository>) -> Router {
    let cors = cors_layer(&config);
    let timeout = TimeoutLayer::new(config.request_timeout());
    let state = AppState { config, splits };

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Receipt routes
    let receipt_routes = Router::new()
        .route("/process", post(receipts::process))
        .route("/breakdown", post(receipts::breakdown))
        .route("/extracted", post(receipts::extracted))
        .route(
            "/:id/splits",
            post(receipts::record_splits).get(receipts::list_splits),
        );

    let api_routes = Router::new()
        .nest("/receipts", receipt_routes)
        .layer(axum_middleware::from_fn(request_logging));

    // Outermost first: the request id is set before tracing sees the request
    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors)
        .layer(timeout);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(layers)
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
