use tracing::instrument;

use crate::config::ScheduleConfig;
use crate::error::Result;
use crate::leaguepedia;
use crate::model::ScheduledMatch;

/// The main entry point for reading the Leaguepedia match schedule.
///
/// `LeaguepediaClient` wraps a [`reqwest::Client`] together with the
/// [`ScheduleConfig`] naming the tracked team and endpoints.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> geng_cal::Result<()> {
/// use geng_cal::LeaguepediaClient;
///
/// let client = LeaguepediaClient::new();
/// let matches = client.get_upcoming_matches(20).await?;
/// println!("Found {} matches", matches.len());
/// # Ok(())
/// # }
/// ```
pub struct LeaguepediaClient {
    http: reqwest::Client,
    config: ScheduleConfig,
}

impl LeaguepediaClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::with_config(client, ScheduleConfig::default())
    }

    pub fn with_config(client: reqwest::Client, config: ScheduleConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Fetch up to `limit` future matches of the tracked team, earliest first.
    ///
    /// Matches beyond `limit` are not fetched; there is no pagination.
    #[instrument(skip(self))]
    pub async fn get_upcoming_matches(&self, limit: u32) -> Result<Vec<ScheduledMatch>> {
        leaguepedia::schedule::get_upcoming_matches(&self.http, &self.config, limit).await
    }
}

impl Default for LeaguepediaClient {
    fn default() -> Self {
        Self::new()
    }
}
