use serde::Serialize;
use std::fmt;

use super::Enumerated;

/// Accident severity (`gravedad`), ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Fatal,
}

impl Enumerated for Severity {
    const ALL: &'static [Self] = &[
        Severity::Minor,
        Severity::Moderate,
        Severity::Severe,
        Severity::Fatal,
    ];

    #[inline]
    fn code(&self) -> &'static str {
        use Severity::*;
        match self {
            Minor => "leve",
            Moderate => "moderado",
            Severe => "grave",
            Fatal => "fatal",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        use Severity::*;
        match code {
            "leve" | "minor" => Some(Minor),
            "moderado" | "moderate" => Some(Moderate),
            "grave" | "severe" => Some(Severe),
            "fatal" => Some(Fatal),
            _ => None,
        }
    }
}

impl From<Severity> for &'static str {
    fn from(value: Severity) -> Self {
        value.code()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_code() {
        assert_eq!(Severity::from_code("leve"), Some(Severity::Minor));
        assert_eq!(Severity::from_code("moderado"), Some(Severity::Moderate));
        assert_eq!(Severity::from_code("grave"), Some(Severity::Severe));
        assert_eq!(Severity::from_code("fatal"), Some(Severity::Fatal));
        assert_eq!(Severity::from_code("severe"), Some(Severity::Severe));
        assert_eq!(Severity::from_code("critical"), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Minor < Severity::Moderate);
        assert!(Severity::Severe < Severity::Fatal);
    }

    #[test]
    fn test_severity_allowed_codes() {
        assert_eq!(Severity::allowed_codes(), "leve, moderado, grave, fatal");
    }
}
