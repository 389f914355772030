pub mod admin_panel;
pub mod calendar;
pub mod dashboard_panel;
pub mod header;
pub mod holiday_modal;
pub mod search_panel;
pub mod toast_container;
