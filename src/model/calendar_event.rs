use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::Serialize;

/// Civil start time as read on a wall clock in some zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartFields {
    pub year: i32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl StartFields {
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

/// One entry of the generated calendar.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: StartFields,
    pub description: String,
    /// Canonical overview URL; stable across runs.
    pub uid: String,
    pub location: String,
    pub calendar_name: String,
    pub product_id: String,
}
