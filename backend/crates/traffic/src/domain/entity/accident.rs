//! Accident Entity

use kernel::id::{AccidentId, ZoneId};

use crate::domain::entity::zone::ZoneSummary;
use crate::domain::value_object::{AccidentType, ReportedAt, Severity};

/// Stored accident, joined with its zone name
#[derive(Debug, Clone, PartialEq)]
pub struct Accident {
    pub id: AccidentId,
    pub accident_type: AccidentType,
    pub severity: Severity,
    pub cause: String,
    pub reported_at: ReportedAt,
    pub zone: ZoneSummary,
}

/// Validated accident ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccident {
    pub accident_type: AccidentType,
    pub severity: Severity,
    pub cause: String,
    pub reported_at: ReportedAt,
    pub zone_id: ZoneId,
}
