//! Entity Module

pub mod accident;
pub mod sensor;
pub mod traffic_event;
pub mod weather_reading;
pub mod zone;
