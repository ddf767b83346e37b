//! Weather Reading Entity
//!
//! Numeric measurements are optional; a reading may carry only a condition.

use kernel::id::{OperatorId, WeatherReadingId, ZoneId};

use crate::domain::entity::zone::ZoneSummary;
use crate::domain::value_object::{ReportedAt, WeatherCondition};

/// Stored weather reading, joined with its zone name
///
/// The operator is write-only: listings never return it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub id: WeatherReadingId,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub visibility: Option<f64>,
    pub condition: WeatherCondition,
    pub reported_at: ReportedAt,
    pub zone: ZoneSummary,
}

/// Validated weather reading ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewWeatherReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub visibility: Option<f64>,
    pub condition: WeatherCondition,
    pub reported_at: ReportedAt,
    pub zone_id: ZoneId,
    pub operator_id: OperatorId,
}
