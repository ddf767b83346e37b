//! Register Traffic Event Use Case

use std::sync::Arc;

use kernel::id::TrafficEventId;

use crate::application::config::TrafficConfig;
use crate::application::validation::{choice, operator_id, present, zone_id};
use crate::domain::entity::traffic_event::NewTrafficEvent;
use crate::domain::repository::TrafficEventRepository;
use crate::domain::value_object::{EventType, ReportedAt};
use crate::error::{TrafficError, TrafficResult};

const REQUIRED_FIELDS: &[&str] = &["tipo_evento", "fecha", "hora", "id_zona"];

/// Raw input, as received
#[derive(Debug, Clone, Default)]
pub struct RegisterTrafficEventInput {
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub zone_id: Option<i32>,
    pub operator_id: Option<i32>,
}

/// Output of register traffic event
#[derive(Debug, Clone)]
pub struct RegisterTrafficEventOutput {
    pub id: TrafficEventId,
}

/// Register traffic event use case
pub struct RegisterTrafficEventUseCase<R>
where
    R: TrafficEventRepository,
{
    repo: Arc<R>,
    config: Arc<TrafficConfig>,
}

impl<R> RegisterTrafficEventUseCase<R>
where
    R: TrafficEventRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<TrafficConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        input: RegisterTrafficEventInput,
    ) -> TrafficResult<RegisterTrafficEventOutput> {
        let (Some(event_type), Some(date), Some(time), Some(zone_id)) = (
            present(input.event_type),
            present(input.date),
            present(input.time),
            zone_id(input.zone_id),
        ) else {
            return Err(TrafficError::MissingFields(REQUIRED_FIELDS));
        };

        let event_type: EventType = choice(&event_type, "Tipo de evento no válido")?;
        let reported_at = ReportedAt::parse(&date, &time)?;

        let event = NewTrafficEvent {
            event_type,
            description: input.description.unwrap_or_default(),
            reported_at,
            zone_id,
            operator_id: operator_id(input.operator_id, self.config.default_operator_id),
        };

        let id = self
            .repo
            .create_event(&event)
            .await
            .map_err(|source| TrafficError::Write {
                message: "Error al guardar el evento",
                source,
            })?;

        tracing::info!(
            event_id = %id,
            zone_id = %event.zone_id,
            event_type = %event.event_type,
            "Traffic event registered"
        );

        Ok(RegisterTrafficEventOutput { id })
    }
}
