use chrono::NaiveDateTime;
use itertools::Itertools;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ScheduleConfig;
use crate::error::{Result, ScheduleError};
use crate::leaguepedia::{self, decode_entities, wiki_url};
use crate::model::{CargoResponse, CargoRow, ScheduledMatch, TimePrecision};

pub(crate) const MATCH_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MATCH_SCHEDULE_FIELDS: [&str; 8] = [
    "DateTime_UTC=DateTime UTC",
    "Team1",
    "Team2",
    "OverviewPage",
    "BestOf",
    "Round",
    "Stream",
    "HasTime",
];

#[instrument(skip(client, config))]
pub(crate) async fn get_upcoming_matches(
    client: &reqwest::Client,
    config: &ScheduleConfig,
    limit: u32,
) -> Result<Vec<ScheduledMatch>> {
    let url = query_url(config, limit)?;
    let body = leaguepedia::get_text(client, &url, &config.user_agent).await?;
    let rows = parse_rows(&body, &url)?;
    debug!(count = rows.len(), limit, "parsed match schedule");
    rows.iter().map(|row| normalize_row(row, config)).collect()
}

/// Build the `cargoquery` URL selecting future matches of the tracked team.
pub(crate) fn query_url(config: &ScheduleConfig, limit: u32) -> Result<Url> {
    let team = &config.tracked_team;
    let fields = MATCH_SCHEDULE_FIELDS.join(",");
    let where_clause = format!(r#"(Team1="{team}" OR Team2="{team}") AND DateTime_UTC > NOW()"#);
    let limit = limit.to_string();

    Url::parse_with_params(
        &config.api_url,
        [
            ("action", "cargoquery"),
            ("format", "json"),
            ("tables", "MatchSchedule"),
            ("fields", fields.as_str()),
            ("where", where_clause.as_str()),
            ("order_by", "DateTime_UTC"),
            ("limit", limit.as_str()),
        ],
    )
    .map_err(|e| ScheduleError::InvalidUrl {
        page: config.api_url.clone(),
        source: e,
    })
}

/// Unwrap the `cargoquery[].title` rows, in source order.
pub(crate) fn parse_rows(body: &str, url: &Url) -> Result<Vec<CargoRow>> {
    let response: CargoResponse =
        serde_json::from_str(body).map_err(|e| ScheduleError::Decode {
            url: url.to_string(),
            source: e,
        })?;

    if let Some(error) = response.error {
        return Err(ScheduleError::CargoApi {
            code: error.code,
            info: error.info,
        });
    }

    Ok(response
        .cargoquery
        .into_iter()
        .map(|item| item.title)
        .collect_vec())
}

pub(crate) fn normalize_row(row: &CargoRow, config: &ScheduleConfig) -> Result<ScheduledMatch> {
    let team1 = decode_entities(&row.team1);
    let team2 = decode_entities(&row.team2);
    let is_home = team1 == config.tracked_team;
    let opponent = if is_home { team2.clone() } else { team1.clone() };

    let best_of = match non_empty(&row.best_of) {
        Some(value) => {
            let n: u32 = value.trim().parse().map_err(|e| ScheduleError::BestOf {
                value: value.to_string(),
                source: e,
            })?;
            // Cargo uses 0 for "unknown"
            (n > 0).then_some(n)
        }
        None => None,
    };
    let round = non_empty(&row.round).map(str::to_string);
    let stream = non_empty(&row.stream).map(str::to_string);

    let precision = if row.has_exact_time() {
        TimePrecision::Exact
    } else {
        TimePrecision::DateOnly
    };

    let start = NaiveDateTime::parse_from_str(&row.date_time_utc, MATCH_DATE_TIME_FORMAT)?.and_utc();

    let overview_url = wiki_url(&config.wiki_base_url, &row.overview_page)?;

    let metadata = [
        best_of.map(|n| format!("Best of {n}")),
        round.as_ref().map(|r| format!("Round: {r}")),
        Some(format!("Time: {precision}")),
        stream.as_ref().map(|s| format!("Stream: {s}")),
        Some(format!("Overview: {overview_url}")),
    ]
    .into_iter()
    .flatten()
    .collect_vec();

    let title = if is_home {
        format!("{} vs. {opponent}", config.tracked_team)
    } else {
        format!("{opponent} vs. {}", config.tracked_team)
    };

    Ok(ScheduledMatch {
        team1,
        team2,
        opponent,
        is_home,
        title,
        start,
        precision,
        best_of,
        round,
        stream,
        overview_url,
        metadata,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
