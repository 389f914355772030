pub mod use_admin;
pub mod use_dashboard;
pub mod use_notifications;
pub mod use_search;
