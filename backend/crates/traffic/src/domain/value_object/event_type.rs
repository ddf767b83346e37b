use serde::Serialize;
use std::fmt;

use super::Enumerated;

/// Kind of traffic event (`tipo_evento`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum EventType {
    Congestion,
    Closure,
    Detour,
    Slow,
}

impl Enumerated for EventType {
    const ALL: &'static [Self] = &[
        EventType::Congestion,
        EventType::Closure,
        EventType::Detour,
        EventType::Slow,
    ];

    #[inline]
    fn code(&self) -> &'static str {
        use EventType::*;
        match self {
            Congestion => "congestion",
            Closure => "cierre",
            Detour => "desvio",
            Slow => "lento",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        use EventType::*;
        match code {
            "congestion" => Some(Congestion),
            "cierre" | "closure" => Some(Closure),
            "desvio" | "detour" => Some(Detour),
            "lento" | "slow" => Some(Slow),
            _ => None,
        }
    }
}

impl From<EventType> for &'static str {
    fn from(value: EventType) -> Self {
        value.code()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_from_code() {
        assert_eq!(EventType::from_code("congestion"), Some(EventType::Congestion));
        assert_eq!(EventType::from_code("cierre"), Some(EventType::Closure));
        assert_eq!(EventType::from_code("desvio"), Some(EventType::Detour));
        assert_eq!(EventType::from_code("lento"), Some(EventType::Slow));
    }

    #[test]
    fn test_event_type_aliases() {
        assert_eq!(EventType::from_code("closure"), Some(EventType::Closure));
        assert_eq!(EventType::from_code("detour"), Some(EventType::Detour));
        assert_eq!(EventType::from_code("slow"), Some(EventType::Slow));
    }

    #[test]
    fn test_event_type_rejects_unknown() {
        assert_eq!(EventType::from_code("flood"), None);
        assert_eq!(EventType::from_code(""), None);
        assert_eq!(EventType::from_code("Congestion"), None);
    }

    #[test]
    fn test_event_type_allowed_codes() {
        assert_eq!(EventType::allowed_codes(), "congestion, cierre, desvio, lento");
    }

    #[test]
    fn test_event_type_serializes_canonical_code() {
        let json = serde_json::to_string(&EventType::Detour).unwrap();
        assert_eq!(json, r#""desvio""#);
    }
}
