//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Register the health indicators in declaration order
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::health::{DatabaseIndicator, HealthIndicator, RedisIndicator};
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;

/// Application state injected into handlers.
///
/// Holds the configuration snapshot and the registered indicators. The
/// declaration order here is the execution and report order.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    database: Arc<DatabaseIndicator>,
    redis: Arc<RedisIndicator>,
}

impl AppState {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn database_indicator(&self) -> Arc<dyn HealthIndicator> {
        self.database.clone()
    }

    pub fn redis_indicator(&self) -> Arc<dyn HealthIndicator> {
        self.redis.clone()
    }

    /// Every registered indicator, in declaration order.
    pub fn all_indicators(&self) -> Vec<Arc<dyn HealthIndicator>> {
        vec![self.database_indicator(), self.redis_indicator()]
    }
}

/// HTTP server for the API service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and datastore
    /// pool. The pool is owned by the caller; indicators only borrow it for
    /// bounded probe operations.
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        let database = Arc::new(DatabaseIndicator::new(
            pool,
            Duration::from_secs(config.database.probe_timeout_secs),
        ));
        let redis = Arc::new(RedisIndicator::new(
            config.redis.url.clone(),
            Duration::from_secs(config.redis.probe_timeout_secs),
        ));

        let state = AppState {
            config: Arc::new(config.clone()),
            database,
            redis,
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/", get(handlers::hello))
            .route("/example", post(handlers::create_example));

        Router::new()
            .route("/health", get(handlers::check_all))
            .route("/health/db", get(handlers::check_database))
            .route("/health/redis", get(handlers::check_redis))
            .nest(&config.server.api_prefix, api)
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
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
}
