pub mod auth;
pub mod calendars;
