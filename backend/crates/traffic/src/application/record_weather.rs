//! Record Weather Use Case
//!
//! Temperature, humidity and visibility are optional. Absent, null and
//! zero values are all stored as NULL.

use std::sync::Arc;

use kernel::id::WeatherReadingId;

use crate::application::config::TrafficConfig;
use crate::application::validation::{choice, measurement, operator_id, present, zone_id};
use crate::domain::entity::weather_reading::NewWeatherReading;
use crate::domain::repository::WeatherRepository;
use crate::domain::value_object::{ReportedAt, WeatherCondition};
use crate::error::{TrafficError, TrafficResult};

const REQUIRED_FIELDS: &[&str] = &["condicion", "fecha", "hora", "id_zona"];

/// Raw input, as received
#[derive(Debug, Clone, Default)]
pub struct RecordWeatherInput {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub visibility: Option<f64>,
    pub condition: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub zone_id: Option<i32>,
    pub operator_id: Option<i32>,
}

/// Output of record weather
#[derive(Debug, Clone)]
pub struct RecordWeatherOutput {
    pub id: WeatherReadingId,
}

/// Record weather use case
pub struct RecordWeatherUseCase<R>
where
    R: WeatherRepository,
{
    repo: Arc<R>,
    config: Arc<TrafficConfig>,
}

impl<R> RecordWeatherUseCase<R>
where
    R: WeatherRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<TrafficConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RecordWeatherInput) -> TrafficResult<RecordWeatherOutput> {
        let (Some(condition), Some(date), Some(time), Some(zone_id)) = (
            present(input.condition),
            present(input.date),
            present(input.time),
            zone_id(input.zone_id),
        ) else {
            return Err(TrafficError::MissingFields(REQUIRED_FIELDS));
        };

        let condition: WeatherCondition = choice(&condition, "Condición no válida")?;
        let reported_at = ReportedAt::parse(&date, &time)?;

        let reading = NewWeatherReading {
            temperature: measurement(input.temperature),
            humidity: measurement(input.humidity),
            visibility: measurement(input.visibility),
            condition,
            reported_at,
            zone_id,
            operator_id: operator_id(input.operator_id, self.config.default_operator_id),
        };

        let id = self
            .repo
            .create_reading(&reading)
            .await
            .map_err(|source| TrafficError::Write {
                message: "Error al guardar datos climáticos",
                source,
            })?;

        tracing::info!(
            reading_id = %id,
            zone_id = %reading.zone_id,
            condition = %reading.condition,
            "Weather reading recorded"
        );

        Ok(RecordWeatherOutput { id })
    }
}
