mod calendar_event;
mod cargo_row;
mod scheduled_match;

pub use calendar_event::*;
pub use cargo_row::*;
pub use scheduled_match::*;
