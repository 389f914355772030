use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod api;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod state;
pub mod views;

pub use api::HolidayApi;
pub use calendar::{build_month_grid, DayCell, MonthCursor, GRID_CELLS};
pub use config::DashboardConfig;
pub use dashboard::{DashboardController, DashboardData, MutationKind, MutationOutcome, SearchOutcome};
pub use error::{HandlerError, RequestError, ValidationError};
pub use forms::{AddHolidayForm, DeleteHolidayForm, SearchForm, SearchQuery};
pub use state::{DashboardStats, Section, ViewAction, ViewState};

/// Date format used by the holiday service for every `fecha` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A named non-working day as returned by the holiday service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// ISO date (YYYY-MM-DD), kept exactly as the service sent it
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Only present in "upcoming" results
    #[serde(rename = "dias_restantes", default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<u32>,
}

impl Holiday {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
            days_remaining: None,
        }
    }

    /// Parse the date string, `None` when the service sent something malformed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Every known holiday grouped by year.
///
/// The service keys its JSON object by year strings ("2025"); serde_json
/// parses those keys straight into integers. The catalog is always rebuilt
/// from a full reload and never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCatalog(BTreeMap<i32, Vec<Holiday>>);

impl HolidayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holidays stored for `year`, in the order the service returned them
    pub fn for_year(&self, year: i32) -> &[Holiday] {
        self.0.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First holiday whose date string equals `date` within `year`
    pub fn find(&self, year: i32, date: &str) -> Option<&Holiday> {
        self.for_year(year).iter().find(|h| h.date == date)
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Years newest first, as shown in the search year selector
    pub fn years_desc(&self) -> Vec<i32> {
        self.0.keys().rev().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<i32, Vec<Holiday>>> for HolidayCatalog {
    fn from(map: BTreeMap<i32, Vec<Holiday>>) -> Self {
        Self(map)
    }
}

impl FromIterator<(i32, Vec<Holiday>)> for HolidayCatalog {
    fn from_iter<T: IntoIterator<Item = (i32, Vec<Holiday>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Raw shape of `GET /feriados/{year}`: the service wraps the list, but a bare
/// list is accepted too
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearHolidaysPayload {
    Wrapped {
        #[serde(rename = "anio", default)]
        year: Option<i32>,
        #[serde(rename = "feriados")]
        holidays: Vec<Holiday>,
    },
    Bare(Vec<Holiday>),
}

/// Holidays of a single year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearHolidays {
    pub year: i32,
    pub holidays: Vec<Holiday>,
}

impl YearHolidays {
    /// Normalize a payload, falling back to the requested year when the
    /// service omitted it
    pub fn from_payload(requested_year: i32, payload: YearHolidaysPayload) -> Self {
        match payload {
            YearHolidaysPayload::Wrapped { year, holidays } => Self {
                year: year.unwrap_or(requested_year),
                holidays,
            },
            YearHolidaysPayload::Bare(holidays) => Self {
                year: requested_year,
                holidays,
            },
        }
    }
}

/// Answer of `GET /feriados/consultar/{date}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCheck {
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "es_feriado")]
    pub is_holiday: bool,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    /// e.g. "no data for this year"
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
}

/// Confirmation returned by the add/delete endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
    #[serde(rename = "detalles", default)]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses_year_string_keys() {
        let json = r#"{
            "2024": [{"fecha": "2024-12-25", "nombre": "Navidad"}],
            "2025": [
                {"fecha": "2025-01-01", "nombre": "Año Nuevo"},
                {"fecha": "2025-05-01", "nombre": "Día del Trabajador"}
            ]
        }"#;

        let catalog: HolidayCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.total(), 3);
        assert_eq!(catalog.years_desc(), vec![2025, 2024]);
        assert_eq!(catalog.for_year(2025)[1].name, "Día del Trabajador");
        assert!(catalog.for_year(2030).is_empty());
        assert_eq!(catalog.find(2024, "2024-12-25").unwrap().name, "Navidad");
        assert!(catalog.find(2025, "2024-12-25").is_none());
    }

    #[test]
    fn test_upcoming_holiday_carries_days_remaining() {
        let json = r#"[{"fecha": "2025-05-01", "nombre": "Día del Trabajador", "dias_restantes": 3}]"#;
        let upcoming: Vec<Holiday> = serde_json::from_str(json).unwrap();
        assert_eq!(upcoming[0].days_remaining, Some(3));
        assert_eq!(upcoming[0].parsed_date(), NaiveDate::from_ymd_opt(2025, 5, 1));
    }

    #[test]
    fn test_malformed_date_does_not_parse() {
        let holiday = Holiday::new("2025-13-40", "Broken");
        assert_eq!(holiday.parsed_date(), None);
    }

    #[test]
    fn test_year_payload_accepts_both_shapes() {
        let wrapped: YearHolidaysPayload =
            serde_json::from_str(r#"{"anio": 2025, "feriados": [{"fecha": "2025-01-01", "nombre": "Año Nuevo"}]}"#)
                .unwrap();
        let year = YearHolidays::from_payload(2025, wrapped);
        assert_eq!(year.year, 2025);
        assert_eq!(year.holidays.len(), 1);

        let bare: YearHolidaysPayload =
            serde_json::from_str(r#"[{"fecha": "2026-01-01", "nombre": "Año Nuevo"}]"#).unwrap();
        let year = YearHolidays::from_payload(2026, bare);
        assert_eq!(year.year, 2026);
        assert_eq!(year.holidays[0].date, "2026-01-01");
    }

    #[test]
    fn test_date_check_without_name() {
        let json = r#"{"fecha": "2025-03-03", "es_feriado": false, "nombre": null}"#;
        let check: DateCheck = serde_json::from_str(json).unwrap();
        assert!(!check.is_holiday);
        assert_eq!(check.name, None);
        assert_eq!(check.message, None);
    }

    #[test]
    fn test_mutation_response_keeps_details() {
        let json = r#"{"mensaje": "Feriado agregado", "detalles": {"total_feriados_anio": 16}}"#;
        let response: MutationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Feriado agregado"));
        assert_eq!(response.details.unwrap()["total_feriados_anio"], 16);
    }
}
