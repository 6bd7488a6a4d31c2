use std::process::ExitCode;

use geng_cal::LeaguepediaClient;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geng_cal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = LeaguepediaClient::new();
    match geng_cal::export_calendar(&client).await {
        Ok(summary) => {
            info!(
                events = summary.events,
                path = %summary.path.display(),
                "calendar up to date"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "calendar export failed");
            ExitCode::FAILURE
        }
    }
}
