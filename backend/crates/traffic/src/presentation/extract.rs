//! Request extractors

use axum::extract::FromRequest;

use crate::error::TrafficError;

/// `axum::Json` whose rejection renders like every other API error
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(TrafficError))]
pub struct JsonBody<T>(pub T);
