use std::path::PathBuf;

/// Get app data directory from environment variable or use default
pub fn get_data_dir() -> PathBuf {
    std::env::var("COINWATCH_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("coinwatch_data"))
}

/// Abbreviate a large dollar amount for display (billions/millions)
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.2} B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.2} M", value / 1_000_000.0)
    } else {
        format!("{:.0}", value)
    }
}
