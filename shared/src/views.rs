//! View models: plain data derived from state, ready for any renderer.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::calendar::format_long_date;
use crate::dashboard::SearchOutcome;
use crate::Holiday;

pub const NO_UPCOMING_MESSAGE: &str = "No upcoming holidays";

/// One card of the upcoming list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingCard {
    pub name: String,
    pub date_display: String,
    pub days_label: String,
}

/// The upcoming list either shows cards or says explicitly that it is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpcomingView {
    Empty(&'static str),
    Cards(Vec<UpcomingCard>),
}

impl UpcomingView {
    pub fn build(upcoming: &[Holiday]) -> Self {
        if upcoming.is_empty() {
            return UpcomingView::Empty(NO_UPCOMING_MESSAGE);
        }
        UpcomingView::Cards(
            upcoming
                .iter()
                .map(|h| UpcomingCard {
                    name: h.name.clone(),
                    date_display: format_long_date(&h.date),
                    days_label: days_remaining_label(h.days_remaining),
                })
                .collect(),
        )
    }
}

pub fn days_remaining_label(days: Option<u32>) -> String {
    match days {
        Some(0) => "Today".to_string(),
        Some(1) => "Tomorrow".to_string(),
        Some(n) => format!("{} days", n),
        None => String::new(),
    }
}

/// One card in the search results panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Cards for a search outcome: one per holiday for a year lookup, a single
/// yes/no card for a date check
pub fn result_cards(outcome: &SearchOutcome) -> Vec<ResultCard> {
    match outcome {
        SearchOutcome::Year(year) => year
            .holidays
            .iter()
            .map(|h| ResultCard {
                heading: h.name.clone(),
                lines: vec![format!("Date: {}", format_long_date(&h.date))],
            })
            .collect(),
        SearchOutcome::Date(check) => {
            let mut lines = vec![format!("Date: {}", format_long_date(&check.date))];
            if let Some(name) = &check.name {
                lines.push(format!("Name: {}", name));
            }
            if let Some(message) = &check.message {
                lines.push(message.clone());
            }
            vec![ResultCard {
                heading: if check.is_holiday { "Is a holiday" } else { "Not a holiday" }.to_string(),
                lines,
            }]
        }
    }
}

/// Content of the holiday detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDetails {
    pub name: String,
    pub date_display: String,
    pub year: Option<i32>,
}

impl From<&Holiday> for HolidayDetails {
    fn from(holiday: &Holiday) -> Self {
        Self {
            name: holiday.name.clone(),
            date_display: format_long_date(&holiday.date),
            year: holiday.parsed_date().map(|d| d.year()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// Transient toast or inline admin message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(id: u32, message: impl Into<String>) -> Self {
        Self {
            id,
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(id: u32, message: impl Into<String>) -> Self {
        Self {
            id,
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Toasts currently on screen plus the inline admin message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    pub toasts: Vec<Notification>,
    pub admin_message: Option<Notification>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeAction {
    Toast(Notification),
    AdminMessage(Notification),
    /// Auto-dismiss by id; a newer admin message is left alone
    Dismiss(u32),
}

impl NoticeBoard {
    pub fn apply(&mut self, action: NoticeAction) {
        match action {
            NoticeAction::Toast(notification) => self.toasts.push(notification),
            NoticeAction::AdminMessage(notification) => self.admin_message = Some(notification),
            NoticeAction::Dismiss(id) => {
                self.toasts.retain(|t| t.id != id);
                if self.admin_message.as_ref().is_some_and(|m| m.id == id) {
                    self.admin_message = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateCheck, YearHolidays};

    fn upcoming(date: &str, name: &str, days: u32) -> Holiday {
        Holiday {
            days_remaining: Some(days),
            ..Holiday::new(date, name)
        }
    }

    #[test]
    fn test_empty_upcoming_list_has_explicit_message() {
        assert_eq!(UpcomingView::build(&[]), UpcomingView::Empty("No upcoming holidays"));
    }

    #[test]
    fn test_upcoming_cards_label_days() {
        let view = UpcomingView::build(&[
            upcoming("2025-05-01", "Día del Trabajador", 0),
            upcoming("2025-05-02", "Puente", 1),
            upcoming("2025-05-25", "Revolución de Mayo", 24),
        ]);
        let UpcomingView::Cards(cards) = view else {
            panic!("expected cards");
        };
        let labels: Vec<_> = cards.iter().map(|c| c.days_label.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Tomorrow", "24 days"]);
        assert_eq!(cards[0].date_display, "Thursday, May 1, 2025");
    }

    #[test]
    fn test_year_results_one_card_per_holiday() {
        let outcome = SearchOutcome::Year(YearHolidays {
            year: 2025,
            holidays: vec![Holiday::new("2025-01-01", "Año Nuevo"), Holiday::new("2025-12-25", "Navidad")],
        });
        let cards = result_cards(&outcome);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].heading, "Navidad");
        assert_eq!(cards[1].lines, vec!["Date: Thursday, December 25, 2025"]);
    }

    #[test]
    fn test_date_check_card() {
        let outcome = SearchOutcome::Date(DateCheck {
            date: "2025-05-01".to_string(),
            is_holiday: true,
            name: Some("Día del Trabajador".to_string()),
            message: None,
        });
        let cards = result_cards(&outcome);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].heading, "Is a holiday");
        assert_eq!(cards[0].lines[1], "Name: Día del Trabajador");
    }

    #[test]
    fn test_details_from_holiday() {
        let details = HolidayDetails::from(&Holiday::new("2025-07-09", "Día de la Independencia"));
        assert_eq!(details.year, Some(2025));
        assert_eq!(details.date_display, "Wednesday, July 9, 2025");
    }

    #[test]
    fn test_dismiss_keeps_newer_admin_message() {
        let mut board = NoticeBoard::default();
        board.apply(NoticeAction::AdminMessage(Notification::error(1, "All fields are required")));
        board.apply(NoticeAction::AdminMessage(Notification::success(2, "Holiday added successfully")));
        board.apply(NoticeAction::Toast(Notification::success(3, "Holiday added")));

        board.apply(NoticeAction::Dismiss(1));
        assert_eq!(board.admin_message.as_ref().unwrap().id, 2);

        board.apply(NoticeAction::Dismiss(3));
        assert!(board.toasts.is_empty());

        board.apply(NoticeAction::Dismiss(2));
        assert!(board.admin_message.is_none());
    }
}
