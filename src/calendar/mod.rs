//! Conversion from scheduled matches to calendar events and `.ics` text.

mod format;
mod generate;

pub use format::{format_event, generation_stamp};
pub use generate::generate_ics;
