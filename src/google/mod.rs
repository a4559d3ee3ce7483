pub mod client;
pub mod oauth;

pub use client::{CalendarClient, PRIMARY_CALENDAR};
pub use oauth::{OAuthClient, TokenMaterial};
