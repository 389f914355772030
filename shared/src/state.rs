//! # View State
//!
//! The single state object behind the dashboard: the holiday catalog, the
//! upcoming list, aggregate stats, the displayed calendar month and the
//! active section. It is created at startup and changed only through
//! [`ViewState::apply`], so every mutation is an explicit [`ViewAction`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{build_month_grid, DayCell, MonthCursor};
use crate::{Holiday, HolidayCatalog};

/// Top-level navigation sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Dashboard,
    Search,
    Calendar,
    Admin,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Dashboard, Section::Search, Section::Calendar, Section::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Search => "Search",
            Section::Calendar => "Calendar",
            Section::Admin => "Admin",
        }
    }

    /// DOM id / data attribute of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Search => "search",
            Section::Calendar => "calendar",
            Section::Admin => "admin",
        }
    }
}

/// Aggregate numbers shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_holidays: usize,
    pub upcoming_count: usize,
    pub current_year: i32,
}

impl DashboardStats {
    pub fn compute(catalog: &HolidayCatalog, upcoming: &[Holiday], today: NaiveDate) -> Self {
        Self {
            total_holidays: catalog.total(),
            upcoming_count: upcoming.len(),
            current_year: today.year(),
        }
    }
}

/// Every way the view state can change
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SwitchSection(Section),
    PreviousMonth,
    NextMonth,
    /// Year picked in the search selector; `None` clears it
    SelectYear(Option<i32>),
    /// Result of a full reload: catalog, upcoming list and fresh stats
    DataLoaded {
        catalog: HolidayCatalog,
        upcoming: Vec<Holiday>,
        stats: DashboardStats,
    },
    ShowDetails(Holiday),
    CloseDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_section: Section,
    pub calendar: MonthCursor,
    /// Year shown in the search selector, if any
    pub selected_year: Option<i32>,
    pub catalog: HolidayCatalog,
    pub upcoming: Vec<Holiday>,
    pub stats: DashboardStats,
    /// Holiday shown in the detail overlay
    pub details: Option<Holiday>,
    /// Bumped whenever the calendar grid has to be recomputed
    pub calendar_revision: u64,
}

impl ViewState {
    /// Fresh state showing the month that contains `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_section: Section::default(),
            calendar: MonthCursor::containing(today),
            selected_year: None,
            catalog: HolidayCatalog::new(),
            upcoming: Vec::new(),
            stats: DashboardStats {
                current_year: today.year(),
                ..DashboardStats::default()
            },
            details: None,
            calendar_revision: 0,
        }
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SwitchSection(section) => {
                self.active_section = section;
                if section == Section::Calendar {
                    self.calendar_revision += 1;
                }
            }
            ViewAction::PreviousMonth => {
                self.calendar = self.calendar.previous();
                self.calendar_revision += 1;
                log::debug!("Calendar moved back to {}", self.calendar.title());
            }
            ViewAction::NextMonth => {
                self.calendar = self.calendar.next();
                self.calendar_revision += 1;
                log::debug!("Calendar moved forward to {}", self.calendar.title());
            }
            ViewAction::DataLoaded { catalog, upcoming, stats } => {
                self.catalog = catalog;
                self.upcoming = upcoming;
                self.stats = stats;
                self.calendar_revision += 1;
            }
            ViewAction::SelectYear(year) => self.selected_year = year,
            ViewAction::ShowDetails(holiday) => self.details = Some(holiday),
            ViewAction::CloseDetails => self.details = None,
        }
    }

    /// Grid for the displayed month
    pub fn calendar_grid(&self, today: NaiveDate) -> Vec<DayCell> {
        build_month_grid(self.calendar, &self.catalog, today)
    }

    /// Options for the search year selector, newest first
    pub fn year_options(&self) -> Vec<i32> {
        self.catalog.years_desc()
    }
}
