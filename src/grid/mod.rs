mod cell;
mod planner;

pub use cell::*;
pub use planner::*;
