//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    accident::{Accident, NewAccident},
    sensor::Sensor,
    traffic_event::{NewTrafficEvent, TrafficEvent},
    weather_reading::{NewWeatherReading, WeatherReading},
    zone::{Coordinates, Zone, ZoneSummary},
};
pub use repository::{
    AccidentRepository, SensorRepository, TrafficEventRepository, TrafficStore,
    WeatherRepository, ZoneRepository,
};
