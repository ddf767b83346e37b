//! Input helpers shared by the write use cases

use kernel::id::{OperatorId, ZoneId};

use crate::domain::value_object::Enumerated;
use crate::error::{TrafficError, TrafficResult};

/// Absent, null and empty strings all count as missing
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Zero counts as missing. Negative ids are passed on and fail the zone FK.
pub(crate) fn zone_id(value: Option<i32>) -> Option<ZoneId> {
    value.filter(|id| *id != 0).map(ZoneId::new)
}

/// Absent or zero falls back to the default operator
pub(crate) fn operator_id(value: Option<i32>, default: OperatorId) -> OperatorId {
    value
        .filter(|id| *id != 0)
        .map(OperatorId::new)
        .unwrap_or(default)
}

/// Weather measurements: zero is stored as NULL, like an absent value
pub(crate) fn measurement(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

pub(crate) fn choice<T: Enumerated>(code: &str, label: &'static str) -> TrafficResult<T> {
    T::from_code(code).ok_or_else(|| TrafficError::InvalidChoice {
        label,
        allowed: T::allowed_codes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::EventType;

    #[test]
    fn test_present() {
        assert_eq!(present(Some("lento".into())), Some("lento".into()));
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_zone_id() {
        assert_eq!(zone_id(Some(3)), Some(ZoneId::new(3)));
        assert_eq!(zone_id(Some(0)), None);
        assert_eq!(zone_id(Some(-1)), Some(ZoneId::new(-1)));
        assert_eq!(zone_id(None), None);
    }

    #[test]
    fn test_operator_id_default() {
        let default = OperatorId::new(2);
        assert_eq!(operator_id(None, default), default);
        assert_eq!(operator_id(Some(0), default), default);
        assert_eq!(operator_id(Some(9), default), OperatorId::new(9));
        assert_eq!(operator_id(Some(-5), default), OperatorId::new(-5));
    }

    #[test]
    fn test_measurement_zero_is_null() {
        assert_eq!(measurement(Some(0.0)), None);
        assert_eq!(measurement(Some(-0.0)), None);
        assert_eq!(measurement(None), None);
        assert_eq!(measurement(Some(-3.5)), Some(-3.5));
        assert_eq!(measurement(Some(87.0)), Some(87.0));
    }

    #[test]
    fn test_choice() {
        let parsed: EventType = choice("cierre", "Tipo de evento no válido").unwrap();
        assert_eq!(parsed, EventType::Closure);

        let err = choice::<EventType>("flood", "Tipo de evento no válido").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tipo de evento no válido. Debe ser: congestion, cierre, desvio, lento"
        );
    }
}
