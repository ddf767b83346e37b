//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Listings come back in their final order; callers never re-sort.

use kernel::id::{AccidentId, TrafficEventId, WeatherReadingId};

use crate::domain::entity::{
    accident::{Accident, NewAccident},
    sensor::Sensor,
    traffic_event::{NewTrafficEvent, TrafficEvent},
    weather_reading::{NewWeatherReading, WeatherReading},
    zone::Zone,
};
use crate::error::StoreResult;

/// Zone repository trait
#[trait_variant::make(ZoneRepository: Send)]
pub trait LocalZoneRepository {
    /// All zones, by id ascending
    async fn list_zones(&self) -> StoreResult<Vec<Zone>>;
}

/// Traffic event repository trait
#[trait_variant::make(TrafficEventRepository: Send)]
pub trait LocalTrafficEventRepository {
    /// All events, newest first (date desc, time desc)
    async fn list_events(&self) -> StoreResult<Vec<TrafficEvent>>;

    /// Insert an event and return its generated id
    async fn create_event(&self, event: &NewTrafficEvent) -> StoreResult<TrafficEventId>;
}

/// Accident repository trait
#[trait_variant::make(AccidentRepository: Send)]
pub trait LocalAccidentRepository {
    /// All accidents, newest first (date desc, time desc)
    async fn list_accidents(&self) -> StoreResult<Vec<Accident>>;

    /// Insert an accident and return its generated id
    async fn create_accident(&self, accident: &NewAccident) -> StoreResult<AccidentId>;
}

/// Weather reading repository trait
#[trait_variant::make(WeatherRepository: Send)]
pub trait LocalWeatherRepository {
    /// All readings, newest first (date desc, time desc)
    async fn list_readings(&self) -> StoreResult<Vec<WeatherReading>>;

    /// Insert a reading and return its generated id
    async fn create_reading(&self, reading: &NewWeatherReading) -> StoreResult<WeatherReadingId>;
}

/// Sensor repository trait
#[trait_variant::make(SensorRepository: Send)]
pub trait LocalSensorRepository {
    /// All sensors, by id ascending
    async fn list_sensors(&self) -> StoreResult<Vec<Sensor>>;
}

/// Everything the HTTP layer needs from a store
pub trait TrafficStore:
    ZoneRepository
    + TrafficEventRepository
    + AccidentRepository
    + WeatherRepository
    + SensorRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> TrafficStore for T where
    T: ZoneRepository
        + TrafficEventRepository
        + AccidentRepository
        + WeatherRepository
        + SensorRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
