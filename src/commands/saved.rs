use crate::commands::{build_coordinator, print_state};
use crate::error::Result;
use crate::services::SettingsStore;
use std::path::Path;

/// Offline mode: load the snapshot from file regardless of its age
pub async fn run(data_dir: &Path) -> Result<()> {
    let coordinator = build_coordinator(data_dir)?;
    let settings = SettingsStore::in_dir(data_dir);

    let state = coordinator.load_saved().await;
    print_state(&state, settings.settings());
    Ok(())
}
