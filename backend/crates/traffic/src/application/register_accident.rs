//! Register Accident Use Case

use std::sync::Arc;

use kernel::id::AccidentId;

use crate::application::validation::{choice, present, zone_id};
use crate::domain::entity::accident::NewAccident;
use crate::domain::repository::AccidentRepository;
use crate::domain::value_object::{AccidentType, ReportedAt, Severity};
use crate::error::{TrafficError, TrafficResult};

const REQUIRED_FIELDS: &[&str] = &["tipo", "gravedad", "fecha", "hora", "id_zona"];

/// Raw input, as received
#[derive(Debug, Clone, Default)]
pub struct RegisterAccidentInput {
    pub accident_type: Option<String>,
    pub severity: Option<String>,
    pub cause: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub zone_id: Option<i32>,
}

/// Output of register accident
#[derive(Debug, Clone)]
pub struct RegisterAccidentOutput {
    pub id: AccidentId,
}

/// Register accident use case
pub struct RegisterAccidentUseCase<R>
where
    R: AccidentRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterAccidentUseCase<R>
where
    R: AccidentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterAccidentInput) -> TrafficResult<RegisterAccidentOutput> {
        let (Some(accident_type), Some(severity), Some(date), Some(time), Some(zone_id)) = (
            present(input.accident_type),
            present(input.severity),
            present(input.date),
            present(input.time),
            zone_id(input.zone_id),
        ) else {
            return Err(TrafficError::MissingFields(REQUIRED_FIELDS));
        };

        // Type is checked before severity, so a request wrong on both
        // reports the type.
        let accident_type: AccidentType = choice(&accident_type, "Tipo de accidente no válido")?;
        let severity: Severity = choice(&severity, "Gravedad no válida")?;
        let reported_at = ReportedAt::parse(&date, &time)?;

        let accident = NewAccident {
            accident_type,
            severity,
            cause: input.cause.unwrap_or_default(),
            reported_at,
            zone_id,
        };

        let id = self
            .repo
            .create_accident(&accident)
            .await
            .map_err(|source| TrafficError::Write {
                message: "Error al guardar el accidente",
                source,
            })?;

        tracing::info!(
            accident_id = %id,
            zone_id = %accident.zone_id,
            severity = %accident.severity,
            "Accident registered"
        );

        Ok(RegisterAccidentOutput { id })
    }
}
