use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::ScheduleConfig;
use crate::model::{CalendarEvent, ScheduledMatch, StartFields};

const STAMP_FORMAT: &str = "%b %-d, %-I:%M %p";

/// Map one match to a calendar event.
///
/// The start instant is read back as wall-clock fields in `zone`; the
/// binary passes [`chrono::Local`], so the fields follow the host's zone.
/// `generated_at` goes into the "Accurate as of" line of the description.
pub fn format_event<Z: TimeZone>(
    scheduled: &ScheduledMatch,
    zone: &Z,
    generated_at: DateTime<Utc>,
    config: &ScheduleConfig,
) -> CalendarEvent {
    let start = StartFields::from_datetime(&scheduled.start.with_timezone(zone));

    let mut description = String::new();
    if !scheduled.metadata.is_empty() {
        description.push_str(&scheduled.metadata.join("\n"));
        description.push('\n');
    }
    if !description.is_empty() {
        description.push('\n');
    }
    description.push_str(scheduled.overview_url.as_str());
    description.push_str("\n\nAccurate as of ");
    description.push_str(&generation_stamp(generated_at, config.stamp_zone));

    CalendarEvent {
        title: scheduled.title.clone(),
        start,
        description,
        uid: scheduled.overview_url.to_string(),
        location: String::new(),
        calendar_name: config.calendar_name.clone(),
        product_id: config.product_id.clone(),
    }
}

/// Render `at` like `Aug 1, 12:00 PM GMT+2`.
pub fn generation_stamp(at: DateTime<Utc>, zone: Tz) -> String {
    let local = at.with_timezone(&zone);
    let offset = gmt_offset(local.offset().fix().local_minus_utc());
    format!("{} {offset}", local.format(STAMP_FORMAT))
}

/// Offset in the en-US short form: `GMT`, `GMT+2`, `GMT-3:30`.
fn gmt_offset(seconds: i32) -> String {
    if seconds == 0 {
        return "GMT".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}
