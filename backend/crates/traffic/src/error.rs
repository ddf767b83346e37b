//! Traffic Error Types
//!
//! This module provides traffic-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Two layers:
//! - [`StoreError`] is what repositories return.
//! - [`TrafficError`] is what use cases and handlers return. Store failures
//!   are wrapped as `Read` or `Write` together with the user-facing message,
//!   since only failed writes expose the underlying detail to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::ReportedAtError;

/// Repository result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures coming out of the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored value does not map to a domain type (e.g. unknown enum code)
    #[error("Unexpected value in column {column}: {value:?}")]
    UnexpectedValue { column: &'static str, value: String },
}

impl StoreError {
    /// Text sent to clients as `details` when a write fails
    pub fn details(&self) -> String {
        match self {
            StoreError::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            StoreError::Database(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

/// Traffic-specific result type alias
pub type TrafficResult<T> = Result<T, TrafficError>;

/// Traffic-specific error variants
#[derive(Debug, Error)]
pub enum TrafficError {
    /// One or more required fields absent, null or empty
    #[error("Los campos {} son requeridos", join_fields(.0))]
    MissingFields(&'static [&'static str]),

    /// Value outside a closed set
    #[error("{label}. Debe ser: {allowed}")]
    InvalidChoice {
        label: &'static str,
        allowed: String,
    },

    /// `fecha` / `hora` could not be parsed
    #[error(transparent)]
    InvalidReportedAt(#[from] ReportedAtError),

    /// Body is not JSON or has wrongly typed fields
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// Store failure while listing
    #[error("{message}")]
    Read {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// Store failure while inserting
    #[error("{message}")]
    Write {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl TrafficError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrafficError::MissingFields(_)
            | TrafficError::InvalidChoice { .. }
            | TrafficError::InvalidReportedAt(_)
            | TrafficError::MalformedBody(_) => ErrorKind::BadRequest,
            TrafficError::Read { .. } | TrafficError::Write { .. } => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            TrafficError::MalformedBody(rejection) => AppError::from(rejection),
            TrafficError::Read { message, source } => {
                AppError::internal(message).with_source(source)
            }
            TrafficError::Write { message, source } => AppError::internal(message)
                .with_details(source.details())
                .with_source(source),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TrafficError::Read { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            TrafficError::Write { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            TrafficError::MalformedBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
            }
            _ => {
                tracing::debug!(error = %self, "Validation failed");
            }
        }
    }
}

impl IntoResponse for TrafficError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

/// `["a", "b", "c"]` -> `"a, b e c"`
fn join_fields(fields: &[&str]) -> String {
    match fields.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} e {}", rest.join(", "), last),
    }
}
