use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone, Utc};
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::calendar::{format_event, generate_ics};
use crate::client::LeaguepediaClient;
use crate::config::ScheduleConfig;
use crate::error::{Result, ScheduleError};
use crate::model::{CalendarEvent, ScheduledMatch};

/// Outcome of a successful export run.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub events: usize,
    pub path: PathBuf,
}

/// Fetch upcoming matches, build the calendar and overwrite the output file.
#[instrument(skip(client))]
pub async fn export_calendar(client: &LeaguepediaClient) -> Result<ExportSummary> {
    let config = client.config();
    let matches = client.get_upcoming_matches(config.limit).await?;
    export_matches(&matches, &Local, Utc::now(), config)
}

/// Build the calendar and overwrite `config.output_path`. The file is left
/// untouched when building fails.
pub fn export_matches<Z: TimeZone>(
    matches: &[ScheduledMatch],
    zone: &Z,
    generated_at: DateTime<Utc>,
    config: &ScheduleConfig,
) -> Result<ExportSummary> {
    let ics = build_calendar(matches, zone, generated_at, config)?;

    write_calendar(&config.output_path, &ics)?;
    info!(
        events = matches.len(),
        path = %config.output_path.display(),
        "wrote calendar"
    );

    Ok(ExportSummary {
        events: matches.len(),
        path: config.output_path.clone(),
    })
}

/// Turn matches into `.ics` text. An empty match list is an error, never an
/// empty calendar.
pub fn build_calendar<Z: TimeZone>(
    matches: &[ScheduledMatch],
    zone: &Z,
    generated_at: DateTime<Utc>,
    config: &ScheduleConfig,
) -> Result<String> {
    if matches.is_empty() {
        return Err(ScheduleError::NoEvents);
    }

    let events = matches
        .iter()
        .map(|m| format_event(m, zone, generated_at, config))
        .collect_vec();
    for event in &events {
        log_event(event);
    }

    generate_ics(&events, zone)
}

/// Overwrite `path` with `contents` in one write.
pub fn write_calendar(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| ScheduleError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn log_event(event: &CalendarEvent) {
    debug!(
        title = %event.title,
        uid = %event.uid,
        start = ?event.start,
        description = %event.description,
        "formatted event"
    );
}
