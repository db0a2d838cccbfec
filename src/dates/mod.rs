mod header;
mod truncate;
mod week;

pub use header::*;
pub use truncate::*;
pub use week::*;
