//! HTTP server setup and the sum route binding.
//!
//! # Responsibilities
//! - Build the Axum router over the composed endpoint chain
//! - Wire up middleware (timeout, request ID, trace)
//! - Decode the wire request, invoke the endpoint, encode the result
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::endpoint::{Endpoint, Failer, SumRequest, SumResponse};
use crate::http::response::ApiError;

/// Application state injected into handlers.
///
/// Holds the endpoint chain behind an `Arc`: composed once at startup,
/// shared read-only by every concurrent request.
pub struct AppState<E> {
    pub endpoint: Arc<E>,
}

impl<E> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self { endpoint: Arc::clone(&self.endpoint) }
    }
}

/// HTTP server for the sum service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server over a fully composed endpoint chain.
    pub fn new<E>(config: AppConfig, endpoint: E) -> Self
    where
        E: Endpoint<Request = SumRequest, Response = SumResponse> + 'static,
    {
        let state = AppState { endpoint: Arc::new(endpoint) };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router<E>(config: &AppConfig, state: AppState<E>) -> Router
    where
        E: Endpoint<Request = SumRequest, Response = SumResponse> + 'static,
    {
        Router::new()
            .route("/sum", post(sum_handler::<E>))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Handler for `POST /sum`: decode → endpoint chain → encode.
async fn sum_handler<E>(State(state): State<AppState<E>>, body: Bytes) -> Response
where
    E: Endpoint<Request = SumRequest, Response = SumResponse> + 'static,
{
    let request: SumRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => return ApiError::Decode(e).into_response(),
    };

    match state.endpoint.call(request).await {
        Ok(response) => match response.failed() {
            // Domain errors ride inside the response; encode them through
            // the error envelope with their own status.
            Some(e) => ApiError::Domain(e).into_response(),
            None => (StatusCode::OK, Json(response)).into_response(),
        },
        Err(e) => ApiError::Endpoint(e).into_response(),
    }
}
