//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::TrafficAppState;
pub use router::{traffic_router, traffic_router_generic};
