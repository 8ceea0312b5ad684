use crate::error::Result;
use crate::services::{SettingsStore, SnapshotStore};
use std::path::Path;

/// Cache slot diagnostics plus current settings
pub fn run(data_dir: &Path) -> Result<()> {
    println!("📊 Coinwatch Status\n");

    let store = SnapshotStore::in_dir(data_dir);
    match store.describe() {
        Some(info) => {
            println!("🗂  Snapshot slot:");
            println!("   Path: {}", info.path.display());
            println!("   Size: {:.2} KB", info.size_bytes as f64 / 1024.0);
            println!("   Last modified: {}", info.modified.format("%d.%m.%Y %H:%M:%S"));
        }
        None => println!("🗂  Snapshot slot: absent"),
    }

    let settings = SettingsStore::in_dir(data_dir);
    let s = settings.settings();
    println!("\n⚙️  Settings:");
    println!("   Theme: {}", s.theme.as_str());
    println!("   Font size: {}", s.font_size.as_str());
    println!("   Dark mode: {}", s.dark_mode);
    println!("   Show price in list: {}", s.show_price_in_list);

    Ok(())
}
