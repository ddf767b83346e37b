//! Application Layer
//!
//! Use cases: one listing use case for the five read endpoints and one use
//! case per write endpoint. Writes validate first and touch the store only
//! once the input is fully valid.

pub mod config;
pub mod list_records;
pub mod record_weather;
pub mod register_accident;
pub mod register_event;
mod validation;

// Re-exports
pub use config::TrafficConfig;
pub use list_records::ListRecordsUseCase;
pub use record_weather::{RecordWeatherInput, RecordWeatherOutput, RecordWeatherUseCase};
pub use register_accident::{
    RegisterAccidentInput, RegisterAccidentOutput, RegisterAccidentUseCase,
};
pub use register_event::{
    RegisterTrafficEventInput, RegisterTrafficEventOutput, RegisterTrafficEventUseCase,
};
