//! Traffic Monitoring Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Resources
//! - Zones and sensors are read-only
//! - Traffic events, accidents and weather readings can be listed and created
//!
//! Every request is independent: validate, run one query, respond.
//! No state is kept in the process besides the connection pool.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TrafficConfig;
pub use error::{StoreError, StoreResult, TrafficError, TrafficResult};
pub use infra::postgres::PgTrafficRepository;
pub use presentation::router::{traffic_router, traffic_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
