//! API DTOs (Data Transfer Objects)
//!
//! Field names are the store's column names; existing clients depend on them.

use chrono::{NaiveDate, NaiveTime};
use kernel::id::{AccidentId, OperatorId, SensorId, TrafficEventId, WeatherReadingId, ZoneId};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::application::{RecordWeatherInput, RegisterAccidentInput, RegisterTrafficEventInput};
use crate::domain::value_object::{AccidentType, EventType, Severity, WeatherCondition};
use crate::domain::{Accident, Sensor, TrafficEvent, WeatherReading, Zone};

// ============================================================================
// Requests
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(i32),
    Text(String),
}

/// Ids arrive as numbers or numeric strings (`"id_zona": "3"`).
/// An empty string counts as absent.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdValue::Number(id)) => Ok(Some(id)),
        Some(IdValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid id: {:?}", text)))
        }
    }
}

/// Request for POST /eventos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrafficEventRequest {
    pub tipo_evento: Option<String>,
    pub descripcion: Option<String>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_zona: Option<i32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_usuario_operador: Option<i32>,
}

impl From<CreateTrafficEventRequest> for RegisterTrafficEventInput {
    fn from(req: CreateTrafficEventRequest) -> Self {
        Self {
            event_type: req.tipo_evento,
            description: req.descripcion,
            date: req.fecha,
            time: req.hora,
            zone_id: req.id_zona,
            operator_id: req.id_usuario_operador,
        }
    }
}

/// Request for POST /accidentes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAccidentRequest {
    pub tipo: Option<String>,
    pub gravedad: Option<String>,
    pub causa: Option<String>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_zona: Option<i32>,
}

impl From<CreateAccidentRequest> for RegisterAccidentInput {
    fn from(req: CreateAccidentRequest) -> Self {
        Self {
            accident_type: req.tipo,
            severity: req.gravedad,
            cause: req.causa,
            date: req.fecha,
            time: req.hora,
            zone_id: req.id_zona,
        }
    }
}

/// Request for POST /clima
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWeatherReadingRequest {
    pub temperatura: Option<f64>,
    pub humedad: Option<f64>,
    pub visibilidad: Option<f64>,
    pub condicion: Option<String>,
    pub fecha: Option<String>,
    pub hora: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_zona: Option<i32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_usuario_operador: Option<i32>,
}

impl From<CreateWeatherReadingRequest> for RecordWeatherInput {
    fn from(req: CreateWeatherReadingRequest) -> Self {
        Self {
            temperature: req.temperatura,
            humidity: req.humedad,
            visibility: req.visibilidad,
            condition: req.condicion,
            date: req.fecha,
            time: req.hora,
            zone_id: req.id_zona,
            operator_id: req.id_usuario_operador,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Response for every successful POST
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i32,
}

/// Response for GET /
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub database: String,
    pub endpoints: Vec<&'static str>,
}

/// Item of GET /zonas
#[derive(Debug, Clone, Serialize)]
pub struct ZoneResponse {
    pub id_zona: ZoneId,
    pub nombre: String,
    pub lng: f64,
    pub lat: f64,
    pub nivel_riesgo: String,
}

impl From<Zone> for ZoneResponse {
    fn from(zone: Zone) -> Self {
        Self {
            id_zona: zone.id,
            nombre: zone.name,
            lng: zone.location.lng,
            lat: zone.location.lat,
            nivel_riesgo: zone.risk_level,
        }
    }
}

/// Item of GET /eventos
#[derive(Debug, Clone, Serialize)]
pub struct TrafficEventResponse {
    pub id_evento: TrafficEventId,
    pub tipo_evento: EventType,
    pub descripcion: String,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub id_zona: ZoneId,
    pub zona_nombre: String,
    pub lng: f64,
    pub lat: f64,
    pub id_usuario_operador: OperatorId,
}

impl From<TrafficEvent> for TrafficEventResponse {
    fn from(event: TrafficEvent) -> Self {
        Self {
            id_evento: event.id,
            tipo_evento: event.event_type,
            descripcion: event.description,
            fecha: event.reported_at.date,
            hora: event.reported_at.time,
            id_zona: event.zone.id,
            zona_nombre: event.zone.name,
            lng: event.location.lng,
            lat: event.location.lat,
            id_usuario_operador: event.operator_id,
        }
    }
}

/// Item of GET /accidentes
#[derive(Debug, Clone, Serialize)]
pub struct AccidentResponse {
    pub id_accidente: AccidentId,
    pub tipo: AccidentType,
    pub gravedad: Severity,
    pub causa: String,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub id_zona: ZoneId,
    pub zona_nombre: String,
}

impl From<Accident> for AccidentResponse {
    fn from(accident: Accident) -> Self {
        Self {
            id_accidente: accident.id,
            tipo: accident.accident_type,
            gravedad: accident.severity,
            causa: accident.cause,
            fecha: accident.reported_at.date,
            hora: accident.reported_at.time,
            id_zona: accident.zone.id,
            zona_nombre: accident.zone.name,
        }
    }
}

/// Item of GET /clima
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReadingResponse {
    pub id_clima: WeatherReadingId,
    pub temperatura: Option<f64>,
    pub humedad: Option<f64>,
    pub visibilidad: Option<f64>,
    pub condicion: WeatherCondition,
    pub fecha: NaiveDate,
    pub hora: NaiveTime,
    pub id_zona: ZoneId,
    pub zona_nombre: String,
}

impl From<WeatherReading> for WeatherReadingResponse {
    fn from(reading: WeatherReading) -> Self {
        Self {
            id_clima: reading.id,
            temperatura: reading.temperature,
            humedad: reading.humidity,
            visibilidad: reading.visibility,
            condicion: reading.condition,
            fecha: reading.reported_at.date,
            hora: reading.reported_at.time,
            id_zona: reading.zone.id,
            zona_nombre: reading.zone.name,
        }
    }
}

/// Item of GET /sensores
#[derive(Debug, Clone, Serialize)]
pub struct SensorResponse {
    pub id_sensor: SensorId,
    pub tipo_sensor: String,
    pub estado: String,
    pub id_zona: ZoneId,
    pub zona_nombre: String,
    pub lng: f64,
    pub lat: f64,
}

impl From<Sensor> for SensorResponse {
    fn from(sensor: Sensor) -> Self {
        Self {
            id_sensor: sensor.id,
            tipo_sensor: sensor.sensor_type,
            estado: sensor.status,
            id_zona: sensor.zone.id,
            zona_nombre: sensor.zone.name,
            lng: sensor.location.lng,
            lat: sensor.location.lat,
        }
    }
}
