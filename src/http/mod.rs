//! HTTP surface for the Instruments API
//!
//! The route table is an explicit composition of stateless handlers; the
//! only state threaded through is the store handle. Failures of any kind
//! surface as the normalized `{status, message, detail}` error body via
//! [`HttpError`].
//!
//! # Routes
//!
//! | Route | Success |
//! |---|---|
//! | `GET /` | 200 welcome text |
//! | `GET /instruments/:instrumentID` | 200 + record |
//! | `POST /instruments` | 201 + created record |
//! | `PUT /instruments/:instrumentID` | 201 + updated record |
//! | `DELETE /instruments/:instrumentID` | 200 + deletion result |
//!
//! # Example
//!
//! ```no_run
//! use bandstand::adapters::memory::MemoryStore;
//! use bandstand::http::{router, AppState};
//! use std::sync::Arc;
//!
//! let app = router(AppState {
//!     store: Arc::new(MemoryStore::new()),
//! });
//! ```

pub mod error;
pub mod handlers;

pub use error::HttpError;

use crate::adapters::store::InstrumentStore;
use crate::config::BandstandConfig;
use crate::domain::{BandstandError, Result};
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The document-store collaborator
    pub store: Arc<dyn InstrumentStore>,
}

/// Build the Instruments API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/instruments", post(handlers::create_instrument))
        .route(
            "/instruments/:instrument_id",
            get(handlers::get_instrument)
                .put(handlers::update_instrument)
                .delete(handlers::delete_instrument),
        )
        .layer(middleware::from_fn(log_failures))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Serve the API until the shutdown future resolves
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(
    config: &BandstandConfig,
    store: Arc<dyn InstrumentStore>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = router(AppState { store });

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BandstandError::Io(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "Instruments API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| BandstandError::Io(format!("Server error: {e}")))?;

    Ok(())
}

/// Log every failed request at the boundary with its method and path
async fn log_failures(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Request failed"
        );
    }

    response
}
