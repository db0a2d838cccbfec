mod calendar;
mod client;
mod entry;
mod repository;

pub use calendar::*;
pub use client::*;
pub use entry::*;
pub use repository::*;
