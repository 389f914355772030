//! Form state for the search and admin sections.
//!
//! Validation is a presence check only: date and name formats are left to the
//! holiday service. The one exception is the year, which has to be an integer
//! to be sent at all.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Search by year or by date; the two inputs exclude each other
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub year: String,
    pub date: String,
}

/// What a valid search form asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Year(i32),
    Date(String),
}

impl SearchForm {
    /// Picking a year clears the date input
    pub fn select_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
        if !self.year.trim().is_empty() {
            self.date.clear();
        }
    }

    /// Picking a date clears the year selector
    pub fn select_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
        if !self.date.trim().is_empty() {
            self.year.clear();
        }
    }

    /// The year wins when both are somehow filled in
    pub fn query(&self) -> Result<SearchQuery, ValidationError> {
        let year = self.year.trim();
        let date = self.date.trim();
        if !year.is_empty() {
            parse_year(year).map(SearchQuery::Year)
        } else if !date.is_empty() {
            Ok(SearchQuery::Date(date.to_string()))
        } else {
            Err(ValidationError::EmptySearch)
        }
    }
}

/// Admin form for adding a holiday
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddHolidayForm {
    pub year: String,
    pub date: String,
    pub name: String,
    pub api_key: String,
}

/// Validated add request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHoliday {
    pub year: i32,
    pub date: String,
    pub name: String,
    pub api_key: String,
}

impl AddHolidayForm {
    pub fn validate(&self) -> Result<NewHoliday, ValidationError> {
        require(&[
            ("year", &self.year),
            ("date", &self.date),
            ("name", &self.name),
            ("api_key", &self.api_key),
        ])?;
        Ok(NewHoliday {
            year: parse_year(&self.year)?,
            date: self.date.trim().to_string(),
            name: self.name.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Admin form for deleting a holiday
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteHolidayForm {
    pub year: String,
    pub date: String,
    pub api_key: String,
}

/// Validated delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRemoval {
    pub year: i32,
    pub date: String,
    pub api_key: String,
}

impl DeleteHolidayForm {
    pub fn validate(&self) -> Result<HolidayRemoval, ValidationError> {
        require(&[("year", &self.year), ("date", &self.date), ("api_key", &self.api_key)])?;
        Ok(HolidayRemoval {
            year: parse_year(&self.year)?,
            date: self.date.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn require(fields: &[(&'static str, &String)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

fn parse_year(raw: &str) -> Result<i32, ValidationError> {
    raw.trim().parse::<i32>().map_err(|_| ValidationError::InvalidYear)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_add_form() -> AddHolidayForm {
        AddHolidayForm {
            year: "2025".to_string(),
            date: "2025-05-01".to_string(),
            name: " Día del Trabajador ".to_string(),
            api_key: "secret".to_string(),
        }
    }

    #[test]
    fn test_add_form_valid() {
        let holiday = filled_add_form().validate().unwrap();
        assert_eq!(holiday.year, 2025);
        assert_eq!(holiday.name, "Día del Trabajador");
    }

    #[test]
    fn test_add_form_reports_every_missing_field() {
        let form = AddHolidayForm {
            name: "   ".to_string(),
            api_key: String::new(),
            ..filled_add_form()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["name", "api_key"]))
        );
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        let form = AddHolidayForm {
            year: "twenty".to_string(),
            ..filled_add_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_date_format_is_not_checked_locally() {
        let form = DeleteHolidayForm {
            year: "2025".to_string(),
            date: "01/05/2025".to_string(),
            api_key: "secret".to_string(),
        };
        assert_eq!(form.validate().unwrap().date, "01/05/2025");
    }

    #[test]
    fn test_reset_clears_form() {
        let mut form = filled_add_form();
        form.reset();
        assert_eq!(form, AddHolidayForm::default());
    }

    #[test]
    fn test_search_inputs_exclude_each_other() {
        let mut form = SearchForm::default();
        form.select_date("2025-05-01");
        form.select_year("2025");
        assert_eq!(form.date, "");
        assert_eq!(form.query(), Ok(SearchQuery::Year(2025)));

        form.select_date("2025-05-01");
        assert_eq!(form.year, "");
        assert_eq!(form.query(), Ok(SearchQuery::Date("2025-05-01".to_string())));

        // Clearing one input leaves the other alone
        form.select_year("");
        assert_eq!(form.date, "2025-05-01");
    }

    #[test]
    fn test_empty_search_is_rejected() {
        assert_eq!(SearchForm::default().query(), Err(ValidationError::EmptySearch));
    }
}
