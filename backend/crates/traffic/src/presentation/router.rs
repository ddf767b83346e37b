//! Traffic Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::TrafficConfig;
use crate::domain::repository::TrafficStore;
use crate::infra::postgres::PgTrafficRepository;
use crate::presentation::handlers::{self, TrafficAppState};

/// Create the traffic router with PostgreSQL repository
pub fn traffic_router(repo: PgTrafficRepository, config: TrafficConfig) -> Router {
    traffic_router_generic(repo, config)
}

/// Create a generic traffic router for any repository implementation
pub fn traffic_router_generic<R>(repo: R, config: TrafficConfig) -> Router
where
    R: TrafficStore,
{
    let state = TrafficAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::service_info::<R>))
        .route("/zonas", get(handlers::list_zones::<R>))
        .route(
            "/eventos",
            get(handlers::list_events::<R>).post(handlers::create_event::<R>),
        )
        .route(
            "/accidentes",
            get(handlers::list_accidents::<R>).post(handlers::create_accident::<R>),
        )
        .route(
            "/clima",
            get(handlers::list_weather::<R>).post(handlers::create_weather::<R>),
        )
        .route("/sensores", get(handlers::list_sensors::<R>))
        .fallback(handlers::not_found)
        .with_state(state)
}
