use serde::Serialize;
use std::fmt;

use super::Enumerated;

/// Weather condition (`condicion`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Fog,
    Storm,
}

impl Enumerated for WeatherCondition {
    const ALL: &'static [Self] = &[
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rain,
        WeatherCondition::Fog,
        WeatherCondition::Storm,
    ];

    #[inline]
    fn code(&self) -> &'static str {
        use WeatherCondition::*;
        match self {
            Clear => "soleado",
            Cloudy => "nublado",
            Rain => "lluvia",
            Fog => "niebla",
            Storm => "tormenta",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        use WeatherCondition::*;
        match code {
            "soleado" | "clear" => Some(Clear),
            "nublado" | "cloudy" => Some(Cloudy),
            "lluvia" | "rain" => Some(Rain),
            "niebla" | "fog" => Some(Fog),
            "tormenta" | "storm" => Some(Storm),
            _ => None,
        }
    }
}

impl From<WeatherCondition> for &'static str {
    fn from(value: WeatherCondition) -> Self {
        value.code()
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
