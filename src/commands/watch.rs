use crate::commands::{build_coordinator, print_state};
use crate::error::Result;
use crate::services::SettingsStore;
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Long-running refresh loop
///
/// The coordinator's cooldown still applies, so an interval shorter than the
/// cooldown just produces ignored triggers in between.
pub async fn run(data_dir: &Path, interval_secs: u64) -> Result<()> {
    let coordinator = build_coordinator(data_dir)?;
    let settings = SettingsStore::in_dir(data_dir);

    println!("👀 Watching prices every {}s (Ctrl-C to stop)", interval_secs);

    let mut iteration = 0u64;
    loop {
        iteration += 1;
        info!(iteration, "Starting refresh cycle");

        let state = coordinator.refresh().await;
        print_state(&state, settings.settings());

        sleep(Duration::from_secs(interval_secs)).await;
    }
}
