mod describe;
mod messages;

pub use describe::*;
