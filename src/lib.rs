#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
//! Toolkit-independent core of a resource calendar view: grid planning,
//! recurrence rule descriptions, date truncation and iCalendar web feeds.

pub mod config;
pub mod dates;
pub mod error;
pub mod grid;
pub mod ical;
pub mod logger;
pub mod recurrence;

pub use error::{Error, ErrorKind};
