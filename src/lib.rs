pub use client::LeaguepediaClient;
pub use config::ScheduleConfig;
pub use error::{Result, ScheduleError};
pub use export::{build_calendar, export_calendar, export_matches, write_calendar, ExportSummary};
pub use model::*;

pub mod calendar;
mod client;
pub mod config;
mod error;
pub mod export;
pub(crate) mod leaguepedia;
mod model;
