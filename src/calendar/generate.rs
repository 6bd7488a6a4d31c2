use chrono::{TimeZone, Utc};
use icalendar::{Calendar, Component, EventLike, Property};

use crate::error::{Result, ScheduleError};
use crate::model::CalendarEvent;

/// Serialize `events` into one VCALENDAR.
///
/// Start fields are resolved through `zone` (the zone they were read in)
/// and written as UTC instants. A wall-clock time repeated by a DST
/// fall-back resolves to the earlier instant. The calendar name and PRODID
/// are taken from the first event.
pub fn generate_ics<Z: TimeZone>(events: &[CalendarEvent], zone: &Z) -> Result<String> {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));

    let product_id = events.first().map(|e| e.product_id.as_str());
    if let Some(first) = events.first() {
        cal.append_property(Property::new("X-WR-CALNAME", &first.calendar_name));
    }

    for event in events {
        let start = zone
            .with_ymd_and_hms(
                event.start.year,
                event.start.month,
                event.start.day,
                event.start.hour,
                event.start.minute,
                0,
            )
            .earliest()
            .ok_or_else(|| ScheduleError::Serialization {
                uid: event.uid.clone(),
                reason: format!(
                    "start {:04}-{:02}-{:02} {:02}:{:02} does not exist in this zone",
                    event.start.year,
                    event.start.month,
                    event.start.day,
                    event.start.hour,
                    event.start.minute
                ),
            })?
            .with_timezone(&Utc);

        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.summary(&event.title);
        ics_event.starts(start);
        ics_event.description(&event.description);
        if !event.location.is_empty() {
            ics_event.location(&event.location);
        }
        cal.push(ics_event.done());
    }

    let cal = cal.done();
    Ok(replace_product_id(&cal.to_string(), product_id))
}

/// Swap the icalendar crate's PRODID for ours and drop CALSCALE (the default).
fn replace_product_id(ics: &str, product_id: Option<&str>) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            if let Some(product_id) = product_id {
                result.push_str("PRODID:");
                result.push_str(product_id);
                result.push_str("\r\n");
                continue;
            }
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset};

    use super::*;
    use crate::model::StartFields;

    fn event(uid: &str, start: StartFields) -> CalendarEvent {
        CalendarEvent {
            title: "Gen.G vs. T1".to_string(),
            start,
            description: "Best of 3\nTime: exact".to_string(),
            uid: uid.to_string(),
            location: String::new(),
            calendar_name: "Gen.G (LoL)".to_string(),
            product_id: "-//test//EN".to_string(),
        }
    }

    fn start(day: u32, hour: u32) -> StartFields {
        StartFields {
            year: 2025,
            month: 8,
            day,
            hour,
            minute: 0,
        }
    }

    /// Unfold RFC 5545 continuation lines so assertions can match whole values.
    fn unfold(ics: &str) -> String {
        ics.replace("\r\n ", "").replace("\r\n\t", "")
    }

    #[test]
    fn test_generate_ics_single_event() {
        let ics = generate_ics(
            &[event("https://lol.fandom.com/wiki/LCK/2025_Season", start(1, 10))],
            &Utc,
        )
        .unwrap();
        let ics = unfold(&ics);

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.trim_end().ends_with("END:VCALENDAR"));
        assert!(ics.contains("PRODID:-//test//EN\r\n"));
        assert!(!ics.contains("ICALENDAR-RS"));
        assert!(!ics.contains("CALSCALE"));
        assert!(ics.contains("METHOD:PUBLISH\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Gen.G (LoL)\r\n"));
        assert!(ics.contains("UID:https://lol.fandom.com/wiki/LCK/2025_Season\r\n"));
        assert!(ics.contains("SUMMARY:Gen.G vs. T1\r\n"));
        assert!(ics.contains("DTSTART:20250801T100000Z\r\n"));
        assert!(ics.contains("DESCRIPTION:Best of 3\\nTime: exact\r\n"));
        assert!(!ics.contains("LOCATION"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn test_generate_ics_resolves_start_in_zone() {
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        let ics = generate_ics(&[event("a", start(2, 3))], &seoul).unwrap();

        let expected: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 8, 1, 18, 0, 0).unwrap();
        assert!(ics.contains(&format!("DTSTART:{}\r\n", expected.format("%Y%m%dT%H%M%SZ"))));
    }

    #[test]
    fn test_generate_ics_one_vevent_per_event() {
        let events = [event("a", start(1, 10)), event("b", start(3, 8))];
        let ics = generate_ics(&events, &Utc).unwrap();

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.contains("UID:a\r\n"));
        assert!(ics.contains("UID:b\r\n"));
    }

    #[test]
    fn test_generate_ics_repeated_hour_takes_earlier_instant() {
        // 02:30 happens twice on the fall-back night in Berlin
        let repeated = StartFields {
            year: 2025,
            month: 10,
            day: 26,
            hour: 2,
            minute: 30,
        };
        let ics = generate_ics(&[event("repeat", repeated)], &chrono_tz::Europe::Berlin).unwrap();
        assert!(ics.contains("DTSTART:20251026T003000Z\r\n"));
    }

    #[test]
    fn test_generate_ics_rejects_nonexistent_start() {
        // 02:30 on the spring-forward night does not exist in Berlin
        let gap = StartFields {
            year: 2025,
            month: 3,
            day: 30,
            hour: 2,
            minute: 30,
        };
        let err = generate_ics(&[event("gap", gap)], &chrono_tz::Europe::Berlin).unwrap_err();
        assert!(matches!(err, ScheduleError::Serialization { ref uid, .. } if uid == "gap"));
    }
}
