//! Traffic Event Entity

use kernel::id::{OperatorId, TrafficEventId, ZoneId};

use crate::domain::entity::zone::{Coordinates, ZoneSummary};
use crate::domain::value_object::{EventType, ReportedAt};

/// Stored traffic event, joined with its zone
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficEvent {
    pub id: TrafficEventId,
    pub event_type: EventType,
    pub description: String,
    pub reported_at: ReportedAt,
    pub zone: ZoneSummary,
    pub location: Coordinates,
    pub operator_id: OperatorId,
}

/// Validated traffic event ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrafficEvent {
    pub event_type: EventType,
    pub description: String,
    pub reported_at: ReportedAt,
    pub zone_id: ZoneId,
    pub operator_id: OperatorId,
}
