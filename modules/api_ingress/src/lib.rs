use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use axum::{middleware::from_fn, routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

/// Fallback request timeout when the server config leaves it at 0.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body for requests no module handles.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// HTTP status code
    pub code: u16,
    /// RFC3339 timestamp when the error occurred
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// HTTP host: wraps module routers with the shared middleware stack and
/// serves them.
pub struct ApiIngress {
    config: ApiIngressConfig,
    request_timeout: Duration,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig, request_timeout: Duration) -> Self {
        let request_timeout = if request_timeout.is_zero() {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            request_timeout
        };
        Self {
            config,
            request_timeout,
        }
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Merge `routes` with the host's own endpoints and apply middleware.
    ///
    /// Layers are listed innermost first; the request id is set before it is
    /// propagated, recorded into extensions and traced.
    pub fn build_router(&self, routes: Router) -> Router {
        tracing::debug!("Building router");
        let x_request_id = crate::request_id::header();

        let mut router = Router::new()
            .route("/health", get(web::health_check))
            .route("/app.css", get(web::stylesheet))
            .merge(routes)
            .fallback(web::not_found);

        router = router.layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));
        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }
        router = router.layer(TimeoutLayer::new(self.request_timeout));
        router = router.layer(crate::request_id::trace_layer());
        router = router.layer(from_fn(crate::request_id::record_request_id));
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
        router.layer(SetRequestIdLayer::new(
            x_request_id,
            crate::request_id::MakeReqId,
        ))
    }

    /// Bind `addr` and serve `router` until `shutdown` resolves.
    pub async fn serve<F>(&self, addr: &str, router: Router, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind '{}': {}", addr, e))?;
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);
        serve_listener(listener, router, shutdown).await
    }
}

/// Serve on an already-bound listener with graceful shutdown.
pub async fn serve_listener<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
