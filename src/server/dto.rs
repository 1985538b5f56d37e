use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::server::response::ApiError;
use crate::types::{DATETIME_FORMAT, Schedule};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub mail: String,
    pub password: String,
}

/// Wire form of a schedule or vacation. Dates travel as
/// `YYYY-MM-DD HH:MM:SS` strings; null or empty means unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDto {
    #[serde(default)]
    pub schedule_id: i64,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDateTime>, ApiError> {
    match value {
        None | Some("") => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
            .map(Some)
            .map_err(|e| ApiError::bad_request(format!("Invalid {field} '{s}': {e}"))),
    }
}

impl ScheduleDto {
    /// Parses the wire dates into a schedule model.
    pub fn into_schedule(self) -> Result<Schedule, ApiError> {
        Ok(Schedule {
            schedule_id: self.schedule_id,
            project_id: self.project_id,
            start_date: parse_date("start_date", self.start_date.as_deref())?,
            end_date: parse_date("end_date", self.end_date.as_deref())?,
        })
    }
}

impl From<Schedule> for ScheduleDto {
    fn from(schedule: Schedule) -> Self {
        Self {
            schedule_id: schedule.schedule_id,
            project_id: schedule.project_id,
            start_date: schedule
                .start_date
                .map(|d| d.format(DATETIME_FORMAT).to_string()),
            end_date: schedule
                .end_date
                .map(|d| d.format(DATETIME_FORMAT).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn dto(start: Option<&str>, end: Option<&str>) -> ScheduleDto {
        ScheduleDto {
            schedule_id: 3,
            project_id: 2,
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    #[test]
    fn test_dates_parse_and_format() {
        let schedule = dto(Some("2024-03-04 09:00:00"), Some("2024-03-04 17:30:00"))
            .into_schedule()
            .unwrap();

        let back = ScheduleDto::from(schedule);
        assert_eq!(back.start_date.as_deref(), Some("2024-03-04 09:00:00"));
        assert_eq!(back.end_date.as_deref(), Some("2024-03-04 17:30:00"));
    }

    #[test]
    fn test_end_date_is_formatted_from_end_date() {
        let schedule = dto(Some("2024-01-01 00:00:00"), Some("2024-12-31 23:59:59"))
            .into_schedule()
            .unwrap();

        assert_ne!(schedule.start_date, schedule.end_date);
        assert_eq!(
            ScheduleDto::from(schedule).end_date.as_deref(),
            Some("2024-12-31 23:59:59")
        );
    }

    #[test]
    fn test_empty_or_missing_dates_are_unset() {
        let schedule = dto(Some(""), None).into_schedule().unwrap();
        assert!(schedule.start_date.is_none());
        assert!(schedule.end_date.is_none());

        let back = ScheduleDto::from(schedule);
        assert!(back.start_date.is_none());
    }

    #[test]
    fn test_iso_format_is_rejected() {
        let err = dto(Some("2024-03-04T09:00:00Z"), None)
            .into_schedule()
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("start_date"));
    }
}
