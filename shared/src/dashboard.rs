//! Dashboard command handlers.
//!
//! Each handler validates its input locally, talks to the holiday service
//! through [`HolidayApi`] and returns either the data the view needs or a
//! [`HandlerError`]. Writes are never applied locally: after a successful
//! add or delete the whole catalog is reloaded, then the upcoming list, and
//! only then are the stats recomputed.

use chrono::NaiveDate;

use crate::api::HolidayApi;
use crate::error::{HandlerError, RequestError};
use crate::forms::{AddHolidayForm, DeleteHolidayForm, SearchForm, SearchQuery};
use crate::state::{DashboardStats, ViewAction};
use crate::{DateCheck, Holiday, HolidayCatalog, YearHolidays};

/// Result of a full reload
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub catalog: HolidayCatalog,
    pub upcoming: Vec<Holiday>,
    pub stats: DashboardStats,
}

impl DashboardData {
    pub fn into_action(self) -> ViewAction {
        ViewAction::DataLoaded {
            catalog: self.catalog,
            upcoming: self.upcoming,
            stats: self.stats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Added,
    Deleted,
}

impl MutationKind {
    pub fn success_message(&self) -> &'static str {
        match self {
            MutationKind::Added => "Holiday added successfully",
            MutationKind::Deleted => "Holiday deleted successfully",
        }
    }

    pub fn failure_toast(&self) -> &'static str {
        match self {
            MutationKind::Added => "Failed to add holiday",
            MutationKind::Deleted => "Failed to delete holiday",
        }
    }
}

/// A successful add/delete plus the data reloaded after it
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub kind: MutationKind,
    /// Confirmation text from the service, when it sent one
    pub server_message: Option<String>,
    pub data: DashboardData,
}

/// What a search returned
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Year(YearHolidays),
    Date(DateCheck),
}

impl SearchOutcome {
    /// Heading of the results panel
    pub fn title(&self) -> String {
        match self {
            SearchOutcome::Year(year) => format!("Holidays in {}", year.year),
            SearchOutcome::Date(check) => {
                format!("Date lookup: {}", crate::calendar::format_long_date(&check.date))
            }
        }
    }
}

pub struct DashboardController<A> {
    api: A,
    upcoming_count: u32,
}

impl<A: HolidayApi> DashboardController<A> {
    pub fn new(api: A, upcoming_count: u32) -> Self {
        Self { api, upcoming_count }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Full reload: catalog, then upcoming list, then stats. Strictly
    /// sequential so the view never sees half-updated data.
    pub async fn load(&self, today: NaiveDate) -> Result<DashboardData, RequestError> {
        let catalog = self.api.list_all().await.map_err(|e| {
            log::error!("Failed to load holiday catalog: {}", e);
            e
        })?;
        let upcoming = self.api.list_upcoming(self.upcoming_count).await.map_err(|e| {
            log::error!("Failed to load upcoming holidays: {}", e);
            e
        })?;
        let stats = DashboardStats::compute(&catalog, &upcoming, today);

        log::info!(
            "Loaded {} holidays across {} years, {} upcoming",
            stats.total_holidays,
            catalog.years_desc().len(),
            stats.upcoming_count
        );
        Ok(DashboardData { catalog, upcoming, stats })
    }

    pub async fn search(&self, form: &SearchForm) -> Result<SearchOutcome, HandlerError> {
        match form.query()? {
            SearchQuery::Year(year) => {
                log::info!("Searching holidays for year {}", year);
                Ok(SearchOutcome::Year(self.api.get_by_year(year).await?))
            }
            SearchQuery::Date(date) => {
                log::info!("Checking date {}", date);
                Ok(SearchOutcome::Date(self.api.check_date(&date).await?))
            }
        }
    }

    pub async fn add_holiday(&self, form: &AddHolidayForm, today: NaiveDate) -> Result<MutationOutcome, HandlerError> {
        let holiday = form.validate().map_err(|e| {
            log::warn!("Add holiday rejected: {}", e);
            e
        })?;

        log::info!("Adding holiday '{}' on {}", holiday.name, holiday.date);
        let response = self
            .api
            .create(holiday.year, &holiday.date, &holiday.name, &holiday.api_key)
            .await?;

        let data = self.load(today).await?;
        Ok(MutationOutcome {
            kind: MutationKind::Added,
            server_message: response.message,
            data,
        })
    }

    pub async fn delete_holiday(
        &self,
        form: &DeleteHolidayForm,
        today: NaiveDate,
    ) -> Result<MutationOutcome, HandlerError> {
        let removal = form.validate().map_err(|e| {
            log::warn!("Delete holiday rejected: {}", e);
            e
        })?;

        log::info!("Deleting holiday on {}", removal.date);
        let response = self.api.delete(removal.year, &removal.date, &removal.api_key).await?;

        let data = self.load(today).await?;
        Ok(MutationOutcome {
            kind: MutationKind::Deleted,
            server_message: response.message,
            data,
        })
    }
}
