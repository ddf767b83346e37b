//! Application Configuration
//!
//! Configuration for the traffic application layer.

use kernel::id::OperatorId;

/// Operator credited when a request does not name one
pub const DEFAULT_OPERATOR_ID: OperatorId = OperatorId::new(2);

/// Database name reported by the info endpoint
pub const DEFAULT_DATABASE_NAME: &str = "TraficSecure1";

/// Traffic application configuration
#[derive(Debug, Clone)]
pub struct TrafficConfig {
    /// Substituted for a missing or zero `id_usuario_operador`
    pub default_operator_id: OperatorId,
    /// Reported by `GET /`
    pub database_name: String,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            default_operator_id: DEFAULT_OPERATOR_ID,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
        }
    }
}

impl TrafficConfig {
    pub fn with_database_name(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            ..Self::default()
        }
    }
}
