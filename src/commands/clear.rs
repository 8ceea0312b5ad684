use crate::error::{AppError, Result};
use crate::services::SnapshotStore;
use std::path::Path;

/// Delete the snapshot slot
pub fn run(data_dir: &Path) -> Result<()> {
    let store = SnapshotStore::in_dir(data_dir);

    if store.delete() {
        println!("🗑  Snapshot slot removed");
        Ok(())
    } else {
        Err(AppError::Io(format!(
            "could not remove {}",
            store.path().display()
        )))
    }
}
