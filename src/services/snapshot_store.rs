//! Single-slot snapshot cache
//!
//! Persists one capture of coin records plus its capture timestamp to a JSON
//! file and reads it back either freshness-checked or unconditionally. There
//! is exactly one slot: saving overwrites, deleting empties it. Unreadable or
//! malformed slots collapse to "absent" on reads, so callers cannot
//! distinguish never-saved from corrupted.

use crate::constants::SNAPSHOT_FILE_NAME;
use crate::models::{decode_cached_coins, CoinRecord};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Envelope written to the slot file
#[derive(Serialize)]
struct SnapshotEnvelope<'a> {
    coins: &'a [CoinRecord],
    #[serde(rename = "savedAt")]
    saved_at: f64,
}

/// Envelope read back from the slot file
///
/// Coins stay as raw values here so one malformed record drops alone instead
/// of failing the envelope.
#[derive(Deserialize)]
struct StoredEnvelope {
    coins: Vec<Value>,
    #[serde(rename = "savedAt")]
    saved_at: f64,
}

/// Diagnostic description of the slot file
#[derive(Debug, Clone)]
pub struct SlotInfo {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified: DateTime<Utc>,
}

/// Whether a snapshot of the given age still counts as fresh
///
/// The boundary is inclusive: age equal to the window is fresh.
pub fn is_fresh(age_secs: f64, max_age: Duration) -> bool {
    age_secs <= max_age.as_secs_f64()
}

/// Store managing the single on-disk snapshot slot
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store over an explicit slot path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store over the default slot file inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SNAPSHOT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with a snapshot captured now
    ///
    /// Returns whether the write succeeded. Failure is non-fatal to callers:
    /// freshly fetched data can still be displayed without persistence.
    pub fn save(&self, coins: &[CoinRecord]) -> bool {
        let envelope = SnapshotEnvelope {
            coins,
            saved_at: Utc::now().timestamp_millis() as f64 / 1000.0,
        };

        let json = match serde_json::to_string_pretty(&envelope) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode snapshot: {}", e);
                return false;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!("Failed to create {}: {}", parent.display(), e);
                    return false;
                }
            }
        }

        match fs::write(&self.path, json) {
            Ok(()) => {
                debug!("Saved snapshot of {} coins to {}", coins.len(), self.path.display());
                true
            }
            Err(e) => {
                warn!("Failed to write snapshot to {}: {}", self.path.display(), e);
                false
            }
        }
    }

    fn read_slot(&self) -> Option<StoredEnvelope> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                debug!("No snapshot at {}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<StoredEnvelope>(&content) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                warn!("Malformed snapshot file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Load the cached coins only if the snapshot is within `max_age`
    ///
    /// Staleness is judged against the wall clock at call time.
    pub fn load_fresh(&self, max_age: Duration) -> Option<Vec<CoinRecord>> {
        let stored = self.read_slot()?;

        let age_secs = Utc::now().timestamp_millis() as f64 / 1000.0 - stored.saved_at;
        if !is_fresh(age_secs, max_age) {
            debug!(
                "Snapshot is {:.0}s old, over the {}s window",
                age_secs,
                max_age.as_secs()
            );
            return None;
        }

        Some(decode_cached_coins(&stored.coins))
    }

    /// Load the cached coins and their capture time regardless of age
    pub fn load_any(&self) -> Option<(Vec<CoinRecord>, DateTime<Utc>)> {
        let stored = self.read_slot()?;
        let captured_at = Utc.timestamp_millis_opt((stored.saved_at * 1000.0) as i64).single()?;
        Some((decode_cached_coins(&stored.coins), captured_at))
    }

    /// Remove the slot; true if it is absent afterwards
    pub fn delete(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                warn!("Failed to delete {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Byte size and modification time of the slot, for diagnostic display
    pub fn describe(&self) -> Option<SlotInfo> {
        let meta = fs::metadata(&self.path).ok()?;
        let modified = meta.modified().ok()?;

        Some(SlotInfo {
            path: self.path.clone(),
            size_bytes: meta.len(),
            modified: DateTime::<Utc>::from(modified),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_coins() -> Vec<CoinRecord> {
        vec![
            CoinRecord {
                id: "bitcoin".to_string(),
                name: "Bitcoin".to_string(),
                price: 50_000.0,
                market_cap: 1_000_000_000.0,
                high_24h: 51_000.0,
                low_24h: 49_000.0,
            },
            CoinRecord {
                id: "ethereum".to_string(),
                name: "Ethereum".to_string(),
                price: 3_000.0,
                market_cap: 400_000_000.0,
                high_24h: 3_100.0,
                low_24h: 2_900.0,
            },
        ]
    }

    fn write_envelope(store: &SnapshotStore, saved_at: f64) {
        let coins = serde_json::to_value(sample_coins()).unwrap();
        let content = json!({ "coins": coins, "savedAt": saved_at });
        fs::write(store.path(), serde_json::to_string(&content).unwrap()).unwrap();
    }

    #[test]
    fn test_is_fresh_boundary_inclusive() {
        let window = Duration::from_secs(3600);
        assert!(is_fresh(3600.0, window));
        assert!(is_fresh(0.0, window));
        assert!(!is_fresh(3600.5, window));
    }

    #[test]
    fn test_save_then_load_fresh_round_trip() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        let coins = sample_coins();

        assert!(store.save(&coins));
        let loaded = store.load_fresh(Duration::from_secs(3600)).unwrap();
        assert_eq!(loaded, coins);
    }

    #[test]
    fn test_load_fresh_rejects_stale_but_load_any_keeps_it() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        let saved_at = Utc::now().timestamp_millis() as f64 / 1000.0 - 3661.0;
        write_envelope(&store, saved_at);

        assert!(store.load_fresh(Duration::from_secs(3600)).is_none());

        let (coins, captured_at) = store.load_any().unwrap();
        assert_eq!(coins, sample_coins());
        let delta = (captured_at.timestamp_millis() as f64 / 1000.0 - saved_at).abs();
        assert!(delta < 1.0);
    }

    #[test]
    fn test_load_fresh_accepts_just_inside_window() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        let saved_at = Utc::now().timestamp_millis() as f64 / 1000.0 - 3590.0;
        write_envelope(&store, saved_at);

        assert!(store.load_fresh(Duration::from_secs(3600)).is_some());
    }

    #[test]
    fn test_missing_slot_is_absent() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());

        assert!(store.load_fresh(Duration::from_secs(3600)).is_none());
        assert!(store.load_any().is_none());
        assert!(store.describe().is_none());
    }

    #[test]
    fn test_malformed_slot_is_absent() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        fs::write(store.path(), "not json at all").unwrap();

        assert!(store.load_fresh(Duration::from_secs(3600)).is_none());
        assert!(store.load_any().is_none());
    }

    #[test]
    fn test_missing_saved_at_is_absent() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        fs::write(store.path(), r#"{"coins": []}"#).unwrap();

        assert!(store.load_any().is_none());
    }

    #[test]
    fn test_malformed_record_drops_alone() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        let content = json!({
            "coins": [
                { "id": "bitcoin", "name": "Bitcoin", "price": 1.0, "marketCap": 2.0, "high24h": 3.0, "low24h": 0.5 },
                { "id": "ethereum", "price": "bad-type" }
            ],
            "savedAt": Utc::now().timestamp_millis() as f64 / 1000.0
        });
        fs::write(store.path(), serde_json::to_string(&content).unwrap()).unwrap();

        let coins = store.load_fresh(Duration::from_secs(3600)).unwrap();
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].id, "bitcoin");
    }

    #[test]
    fn test_delete_then_load_any_absent() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        assert!(store.save(&sample_coins()));

        assert!(store.delete());
        assert!(store.load_any().is_none());

        // deleting an absent slot still reports it gone
        assert!(store.delete());
    }

    #[test]
    fn test_load_any_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        assert!(store.save(&sample_coins()));

        let first = store.load_any().unwrap();
        let second = store.load_any().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_overwrites_previous_slot() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        assert!(store.save(&sample_coins()));

        let shorter = vec![sample_coins().remove(0)];
        assert!(store.save(&shorter));

        let (coins, _) = store.load_any().unwrap();
        assert_eq!(coins, shorter);
    }

    #[test]
    fn test_describe_reports_slot_size() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        assert!(store.save(&sample_coins()));

        let info = store.describe().unwrap();
        assert!(info.size_bytes > 0);
        assert_eq!(info.path, store.path());
    }
}
