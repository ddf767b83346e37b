//! Sensor Entity
//!
//! Sensors are provisioned outside this API and only ever listed.

use kernel::id::SensorId;

use crate::domain::entity::zone::{Coordinates, ZoneSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    pub id: SensorId,
    pub sensor_type: String,
    pub status: String,
    pub zone: ZoneSummary,
    pub location: Coordinates,
}
