use crate::commands::{build_coordinator, print_state};
use crate::error::Result;
use crate::services::SettingsStore;
use std::path::Path;

/// Explicit refresh: connectivity-gated and debounced by the coordinator
pub async fn run(data_dir: &Path) -> Result<()> {
    let coordinator = build_coordinator(data_dir)?;
    let settings = SettingsStore::in_dir(data_dir);

    let state = coordinator.refresh().await;
    print_state(&state, settings.settings());
    Ok(())
}
