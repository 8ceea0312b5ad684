//! Fixed endpoints, file names, and timing windows.

use std::time::Duration;

/// Base URL for the CoinGecko API
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

/// Currency the market endpoint quotes prices in
pub const VS_CURRENCY: &str = "usd";

/// Coins tracked by the app, in display order
pub const COIN_IDS: &[&str] = &["bitcoin", "ethereum", "solana"];

/// File name of the single snapshot slot inside the data directory
pub const SNAPSHOT_FILE_NAME: &str = "crypto_data.json";

/// File name of the persisted display preferences
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Maximum age of a cached snapshot before it no longer counts as fresh
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Cooldown after an accepted refresh during which further triggers are ignored
pub const REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

/// Address probed by the connectivity check before an explicit refresh
pub const PROBE_ADDR: &str = "api.coingecko.com:443";

/// Upper bound on how long the connectivity probe may block
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Default interval between refresh attempts in `watch` mode
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 60;
