//! Zone Entity
//!
//! Geographic area every other record is attributed to.

use kernel::id::ZoneId;

/// Point decomposed from the `coordenadas` geometry column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// X ordinate
    pub lng: f64,
    /// Y ordinate
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Zone entity
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub location: Coordinates,
    pub risk_level: String,
}

/// Zone columns denormalized into child rows by the listing joins
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSummary {
    pub id: ZoneId,
    pub name: String,
}
