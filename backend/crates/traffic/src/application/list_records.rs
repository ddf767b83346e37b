//! List Records Use Case
//!
//! Backs the five read endpoints. Ordering is the repository's job; this
//! layer only attaches the user-facing message to store failures.

use std::sync::Arc;

use crate::domain::entity::{
    accident::Accident, sensor::Sensor, traffic_event::TrafficEvent,
    weather_reading::WeatherReading, zone::Zone,
};
use crate::domain::repository::{
    AccidentRepository, SensorRepository, TrafficEventRepository, WeatherRepository,
    ZoneRepository,
};
use crate::error::{TrafficError, TrafficResult};

/// List records use case
pub struct ListRecordsUseCase<R> {
    repo: Arc<R>,
}

impl<R> ListRecordsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: ZoneRepository> ListRecordsUseCase<R> {
    pub async fn zones(&self) -> TrafficResult<Vec<Zone>> {
        self.repo
            .list_zones()
            .await
            .map_err(|source| TrafficError::Read {
                message: "Error al obtener zonas",
                source,
            })
    }
}

impl<R: TrafficEventRepository> ListRecordsUseCase<R> {
    pub async fn events(&self) -> TrafficResult<Vec<TrafficEvent>> {
        self.repo
            .list_events()
            .await
            .map_err(|source| TrafficError::Read {
                message: "Error al obtener eventos",
                source,
            })
    }
}

impl<R: AccidentRepository> ListRecordsUseCase<R> {
    pub async fn accidents(&self) -> TrafficResult<Vec<Accident>> {
        self.repo
            .list_accidents()
            .await
            .map_err(|source| TrafficError::Read {
                message: "Error al obtener accidentes",
                source,
            })
    }
}

impl<R: WeatherRepository> ListRecordsUseCase<R> {
    pub async fn weather(&self) -> TrafficResult<Vec<WeatherReading>> {
        self.repo
            .list_readings()
            .await
            .map_err(|source| TrafficError::Read {
                message: "Error al obtener datos climáticos",
                source,
            })
    }
}

impl<R: SensorRepository> ListRecordsUseCase<R> {
    pub async fn sensors(&self) -> TrafficResult<Vec<Sensor>> {
        self.repo
            .list_sensors()
            .await
            .map_err(|source| TrafficError::Read {
                message: "Error al obtener sensores",
                source,
            })
    }
}
