//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `traffic::TrafficError` / `kernel::error::AppError`.

mod config;

use axum::http::{self, Method, header};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use traffic::{PgTrafficRepository, traffic_router};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,traffic=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Database pool. Connections are opened on demand so the server still
    // starts when the database is down; requests then fail with 500.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.database.clone());

    let repo = PgTrafficRepository::new(pool.clone());

    match repo.ping().await {
        Ok(()) => {
            tracing::info!(database = %config.database_name, "Connected to database");
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                database = %config.database_name,
                "Database connection failed, continuing anyway"
            );
        }
    }

    if config.run_migrations {
        match sqlx::migrate!("../../../database/migrations").run(&pool).await {
            Ok(()) => tracing::info!("Migrations completed"),
            Err(e) => {
                tracing::warn!(error = %e, "Migrations failed, continuing anyway");
            }
        }
    }

    // CORS configuration
    let cors = match &config.frontend_origins {
        Some(origins) => {
            let allowed_origins: Vec<http::HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods(AllowMethods::list([
                    Method::GET,
                    Method::POST,
                    Method::OPTIONS,
                ]))
                .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    // Build router
    let app = traffic_router(repo, config.traffic_config())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
