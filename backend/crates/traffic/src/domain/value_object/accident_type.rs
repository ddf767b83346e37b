use serde::Serialize;
use std::fmt;

use super::Enumerated;

/// Kind of accident (`tipo`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum AccidentType {
    Collision,
    PedestrianStrike,
    Rollover,
    Other,
}

impl Enumerated for AccidentType {
    const ALL: &'static [Self] = &[
        AccidentType::Collision,
        AccidentType::PedestrianStrike,
        AccidentType::Rollover,
        AccidentType::Other,
    ];

    #[inline]
    fn code(&self) -> &'static str {
        use AccidentType::*;
        match self {
            Collision => "colisión",
            PedestrianStrike => "atropello",
            Rollover => "volcamiento",
            Other => "otro",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        use AccidentType::*;
        match code {
            "colisión" | "colision" | "collision" => Some(Collision),
            "atropello" | "pedestrian-strike" => Some(PedestrianStrike),
            "volcamiento" | "rollover" => Some(Rollover),
            "otro" | "other" => Some(Other),
            _ => None,
        }
    }
}

impl From<AccidentType> for &'static str {
    fn from(value: AccidentType) -> Self {
        value.code()
    }
}

impl fmt::Display for AccidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accident_type_from_code() {
        assert_eq!(AccidentType::from_code("colisión"), Some(AccidentType::Collision));
        assert_eq!(AccidentType::from_code("atropello"), Some(AccidentType::PedestrianStrike));
        assert_eq!(AccidentType::from_code("volcamiento"), Some(AccidentType::Rollover));
        assert_eq!(AccidentType::from_code("otro"), Some(AccidentType::Other));
    }

    #[test]
    fn test_accident_type_unaccented_and_english() {
        assert_eq!(AccidentType::from_code("colision"), Some(AccidentType::Collision));
        assert_eq!(AccidentType::from_code("collision"), Some(AccidentType::Collision));
        assert_eq!(
            AccidentType::from_code("pedestrian-strike"),
            Some(AccidentType::PedestrianStrike)
        );
        assert_eq!(AccidentType::from_code("rollover"), Some(AccidentType::Rollover));
    }

    #[test]
    fn test_accident_type_stores_accented_code() {
        let parsed = AccidentType::from_code("colision").unwrap();
        assert_eq!(parsed.code(), "colisión");
        assert_eq!(parsed.to_string(), "colisión");
    }

    #[test]
    fn test_accident_type_allowed_codes() {
        assert_eq!(
            AccidentType::allowed_codes(),
            "colisión, atropello, volcamiento, otro"
        );
    }
}
