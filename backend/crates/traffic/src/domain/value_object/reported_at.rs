//! Reported-at value object
//!
//! `fecha` + `hora` pair stamped on events, accidents and weather readings.
//! Listings are ordered newest first by this pair.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportedAtError {
    #[error("Fecha no válida: {0}. Formato esperado: AAAA-MM-DD")]
    Date(String),
    #[error("Hora no válida: {0}. Formato esperado: HH:MM o HH:MM:SS")]
    Time(String),
}

/// Date and time a record was reported at.
///
/// Field order matters: the derived `Ord` compares the date first, then the
/// time, which is the listing order of the store (`fecha`, `hora`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportedAt {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ReportedAt {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse the raw `fecha` / `hora` strings of a request body
    pub fn parse(date: &str, time: &str) -> Result<Self, ReportedAtError> {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| ReportedAtError::Date(date.to_string()))?;

        let time = TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
            .ok_or_else(|| ReportedAtError::Time(time.to_string()))?;

        Ok(Self { date, time })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_precision() {
        let at = ReportedAt::parse("2024-01-01", "10:00").unwrap();
        assert_eq!(at.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(at.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_seconds_precision() {
        let at = ReportedAt::parse("2023-12-31", "23:59:58").unwrap();
        assert_eq!(at.time, NaiveTime::from_hms_opt(23, 59, 58).unwrap());

        let at = ReportedAt::parse("2023-12-31", "07:05:01.250").unwrap();
        assert_eq!(at.time, NaiveTime::from_hms_milli_opt(7, 5, 1, 250).unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        assert_eq!(
            ReportedAt::parse("01/02/2024", "10:00"),
            Err(ReportedAtError::Date("01/02/2024".to_string()))
        );
        assert!(matches!(
            ReportedAt::parse("2024-02-30", "10:00"),
            Err(ReportedAtError::Date(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_time() {
        assert_eq!(
            ReportedAt::parse("2024-01-01", "25:00"),
            Err(ReportedAtError::Time("25:00".to_string()))
        );
        assert!(matches!(
            ReportedAt::parse("2024-01-01", "noon"),
            Err(ReportedAtError::Time(_))
        ));
    }

    #[test]
    fn test_ordering_date_then_time() {
        let early = ReportedAt::parse("2024-01-01", "23:00").unwrap();
        let later_day = ReportedAt::parse("2024-01-02", "01:00").unwrap();
        let later_hour = ReportedAt::parse("2024-01-01", "23:30").unwrap();

        assert!(early < later_day);
        assert!(early < later_hour);
        assert!(later_hour < later_day);
    }
}
