//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::{
    ListRecordsUseCase, RecordWeatherUseCase, RegisterAccidentUseCase,
    RegisterTrafficEventUseCase, TrafficConfig,
};
use crate::domain::repository::TrafficStore;
use crate::error::TrafficResult;
use crate::presentation::dto::{
    AccidentResponse, CreateAccidentRequest, CreateTrafficEventRequest,
    CreateWeatherReadingRequest, CreatedResponse, SensorResponse, ServiceInfoResponse,
    TrafficEventResponse, WeatherReadingResponse, ZoneResponse,
};
use crate::presentation::extract::JsonBody;

/// Collection paths advertised by `GET /`
pub const ENDPOINTS: [&str; 5] = ["/zonas", "/eventos", "/accidentes", "/clima", "/sensores"];

/// Shared state for traffic handlers
#[derive(Clone)]
pub struct TrafficAppState<R>
where
    R: TrafficStore,
{
    pub repo: Arc<R>,
    pub config: Arc<TrafficConfig>,
}

fn list<T, U: From<T>>(items: Vec<T>) -> Json<Vec<U>> {
    Json(items.into_iter().map(U::from).collect())
}

// ============================================================================
// Info
// ============================================================================

/// GET /
pub async fn service_info<R>(State(state): State<TrafficAppState<R>>) -> Json<ServiceInfoResponse>
where
    R: TrafficStore,
{
    Json(ServiceInfoResponse {
        message: "¡Servidor TraficSecure funcionando!",
        database: state.config.database_name.clone(),
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// Any unmatched route
pub async fn not_found() -> AppError {
    AppError::not_found("Ruta no encontrada")
}

// ============================================================================
// Zones & sensors
// ============================================================================

/// GET /zonas
pub async fn list_zones<R>(
    State(state): State<TrafficAppState<R>>,
) -> TrafficResult<Json<Vec<ZoneResponse>>>
where
    R: TrafficStore,
{
    let zones = ListRecordsUseCase::new(state.repo.clone()).zones().await?;
    Ok(list(zones))
}

/// GET /sensores
pub async fn list_sensors<R>(
    State(state): State<TrafficAppState<R>>,
) -> TrafficResult<Json<Vec<SensorResponse>>>
where
    R: TrafficStore,
{
    let sensors = ListRecordsUseCase::new(state.repo.clone()).sensors().await?;
    Ok(list(sensors))
}

// ============================================================================
// Traffic events
// ============================================================================

/// GET /eventos
pub async fn list_events<R>(
    State(state): State<TrafficAppState<R>>,
) -> TrafficResult<Json<Vec<TrafficEventResponse>>>
where
    R: TrafficStore,
{
    let events = ListRecordsUseCase::new(state.repo.clone()).events().await?;
    Ok(list(events))
}

/// POST /eventos
pub async fn create_event<R>(
    State(state): State<TrafficAppState<R>>,
    JsonBody(req): JsonBody<CreateTrafficEventRequest>,
) -> TrafficResult<(StatusCode, Json<CreatedResponse>)>
where
    R: TrafficStore,
{
    let use_case = RegisterTrafficEventUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Evento registrado exitosamente",
            id: output.id.get(),
        }),
    ))
}

// ============================================================================
// Accidents
// ============================================================================

/// GET /accidentes
pub async fn list_accidents<R>(
    State(state): State<TrafficAppState<R>>,
) -> TrafficResult<Json<Vec<AccidentResponse>>>
where
    R: TrafficStore,
{
    let accidents = ListRecordsUseCase::new(state.repo.clone()).accidents().await?;
    Ok(list(accidents))
}

/// POST /accidentes
pub async fn create_accident<R>(
    State(state): State<TrafficAppState<R>>,
    JsonBody(req): JsonBody<CreateAccidentRequest>,
) -> TrafficResult<(StatusCode, Json<CreatedResponse>)>
where
    R: TrafficStore,
{
    let use_case = RegisterAccidentUseCase::new(state.repo.clone());
    let output = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Accidente registrado exitosamente",
            id: output.id.get(),
        }),
    ))
}

// ============================================================================
// Weather
// ============================================================================

/// GET /clima
pub async fn list_weather<R>(
    State(state): State<TrafficAppState<R>>,
) -> TrafficResult<Json<Vec<WeatherReadingResponse>>>
where
    R: TrafficStore,
{
    let readings = ListRecordsUseCase::new(state.repo.clone()).weather().await?;
    Ok(list(readings))
}

/// POST /clima
pub async fn create_weather<R>(
    State(state): State<TrafficAppState<R>>,
    JsonBody(req): JsonBody<CreateWeatherReadingRequest>,
) -> TrafficResult<(StatusCode, Json<CreatedResponse>)>
where
    R: TrafficStore,
{
    let use_case = RecordWeatherUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Datos climáticos registrados exitosamente",
            id: output.id.get(),
        }),
    ))
}
