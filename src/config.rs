use std::path::PathBuf;

use chrono_tz::Tz;

pub const TRACKED_TEAM: &str = "Gen.G";
pub const API_URL: &str = "https://lol.fandom.com/api.php";
pub const WIKI_BASE_URL: &str = "https://lol.fandom.com/wiki/";
pub const USER_AGENT: &str = "geng-cal/0.1 (contact: gengcal@example.com)";
pub const DEFAULT_LIMIT: u32 = 20;
pub const OUTPUT_PATH: &str = "GenG.ics";
pub const CALENDAR_NAME: &str = "Gen.G (LoL)";
pub const PRODUCT_ID: &str = "-//geng-cal//Leaguepedia schedule//EN";

/// Everything the pipeline needs to know about where to read and write.
///
/// There is no config file or CLI surface; [`ScheduleConfig::default`] holds
/// the compiled-in values and is passed explicitly to the client and the
/// export functions.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Canonical team name, compared verbatim against decoded `Team1`.
    pub tracked_team: String,
    pub api_url: String,
    pub wiki_base_url: String,
    pub user_agent: String,
    /// Upper bound on rows requested from Cargo.
    pub limit: u32,
    pub output_path: PathBuf,
    pub calendar_name: String,
    pub product_id: String,
    /// Zone the "Accurate as of" stamp is rendered in.
    pub stamp_zone: Tz,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            tracked_team: TRACKED_TEAM.to_string(),
            api_url: API_URL.to_string(),
            wiki_base_url: WIKI_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            limit: DEFAULT_LIMIT,
            output_path: PathBuf::from(OUTPUT_PATH),
            calendar_name: CALENDAR_NAME.to_string(),
            product_id: PRODUCT_ID.to_string(),
            stamp_zone: chrono_tz::Europe::Berlin,
        }
    }
}
