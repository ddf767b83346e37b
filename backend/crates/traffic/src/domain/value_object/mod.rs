//! Value Object Module
//!
//! Closed enumerations accepted on the write endpoints, plus the
//! date/time pair every record is stamped with.

pub mod accident_type;
pub mod event_type;
pub mod reported_at;
pub mod severity;
pub mod weather_condition;

pub use accident_type::AccidentType;
pub use event_type::EventType;
pub use reported_at::{ReportedAt, ReportedAtError};
pub use severity::Severity;
pub use weather_condition::WeatherCondition;

/// A field restricted to a fixed set of codes.
///
/// `code()` is the canonical value stored in the database and sent back to
/// clients; `from_code()` also accepts the English alias of each variant.
pub trait Enumerated: Sized + Copy + 'static {
    /// Every variant, in the order they are listed to clients
    const ALL: &'static [Self];

    fn code(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;

    /// Canonical codes joined for error messages, e.g. `"leve, moderado, grave, fatal"`
    fn allowed_codes() -> String {
        Self::ALL
            .iter()
            .map(|v| v.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
