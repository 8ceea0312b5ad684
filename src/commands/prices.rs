use crate::commands::{build_coordinator, print_state};
use crate::error::Result;
use crate::services::SettingsStore;
use std::path::Path;

/// Startup flow: fresh cache wins, otherwise fetch and persist
pub async fn run(data_dir: &Path) -> Result<()> {
    let coordinator = build_coordinator(data_dir)?;
    let settings = SettingsStore::in_dir(data_dir);

    let state = coordinator.start().await;
    print_state(&state, settings.settings());
    Ok(())
}
