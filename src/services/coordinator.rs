//! Cache-first orchestration between the snapshot store, the connectivity
//! probe, and the market client
//!
//! State machine: `Idle → Loading → {Ready, Failed}`. One operation owns the
//! snapshot slot at a time: start, refresh, and load-saved all run under a
//! single async mutex, so concurrent saves cannot interleave and whichever
//! operation completes last owns the final state.

use crate::constants::{DEFAULT_MAX_AGE, PROBE_ADDR, PROBE_TIMEOUT, REFRESH_COOLDOWN};
use crate::models::CoinRecord;
use crate::services::connectivity::is_reachable;
use crate::services::market_client::MarketClient;
use crate::services::snapshot_store::SnapshotStore;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Where the coins in a `Ready` state came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Fresh snapshot from the cache slot at startup
    Cache,
    /// Live fetch from the market endpoint
    Network,
    /// Unconditional load from the slot, age ignored
    File,
}

/// Observable coordinator state
#[derive(Debug, Clone)]
pub enum FetchState {
    Idle,
    Loading,
    Ready {
        coins: Vec<CoinRecord>,
        captured_at: Option<DateTime<Utc>>,
        origin: DataOrigin,
        notice: String,
    },
    Failed {
        message: String,
    },
}

impl FetchState {
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed { .. })
    }
}

/// Timing and probe knobs; defaults mirror the production constants
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Freshness window for the startup cache check
    pub max_age: Duration,
    /// Cooldown after an accepted refresh
    pub refresh_cooldown: Duration,
    /// Address the connectivity probe connects to
    pub probe_addr: String,
    /// Upper bound on the probe
    pub probe_timeout: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            refresh_cooldown: REFRESH_COOLDOWN,
            probe_addr: PROBE_ADDR.to_string(),
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

/// Single owner of the snapshot slot
pub struct CacheCoordinator {
    client: MarketClient,
    store: SnapshotStore,
    config: CoordinatorConfig,
    state: RwLock<FetchState>,
    /// Serializes slot operations and anchors the refresh cooldown
    gate: Mutex<Option<Instant>>,
}

impl CacheCoordinator {
    pub fn new(client: MarketClient, store: SnapshotStore) -> Self {
        Self::with_config(client, store, CoordinatorConfig::default())
    }

    pub fn with_config(client: MarketClient, store: SnapshotStore, config: CoordinatorConfig) -> Self {
        Self {
            client,
            store,
            config,
            state: RwLock::new(FetchState::Idle),
            gate: Mutex::new(None),
        }
    }

    /// Current state, cloned
    pub async fn state(&self) -> FetchState {
        self.state.read().await.clone()
    }

    async fn set_state(&self, next: FetchState) {
        *self.state.write().await = next;
    }

    /// Startup flow: a fresh non-empty cached snapshot wins without touching
    /// the network; otherwise fetch and persist
    pub async fn start(&self) -> FetchState {
        let _gate = self.gate.lock().await;
        self.set_state(FetchState::Loading).await;

        if let Some(coins) = self.store.load_fresh(self.config.max_age) {
            if !coins.is_empty() {
                info!("Using fresh cached snapshot ({} coins)", coins.len());
                let next = FetchState::Ready {
                    coins,
                    captured_at: None,
                    origin: DataOrigin::Cache,
                    notice: "Loaded fresh saved data".to_string(),
                };
                self.set_state(next.clone()).await;
                return next;
            }
        }

        debug!("No fresh snapshot, fetching from the network");
        self.fetch_and_persist().await
    }

    /// Explicit refresh: debounced, connectivity-gated, then fetch + persist
    ///
    /// A trigger inside the cooldown window is ignored and the current state
    /// returned unchanged. A trigger rejected by the probe fails with a
    /// connectivity notice and does not arm the cooldown.
    pub async fn refresh(&self) -> FetchState {
        let mut gate = self.gate.lock().await;

        if let Some(last) = *gate {
            let elapsed = last.elapsed();
            if elapsed < self.config.refresh_cooldown {
                debug!(
                    "Refresh ignored, cooldown has {:?} left",
                    self.config.refresh_cooldown - elapsed
                );
                return self.state().await;
            }
        }

        if !is_reachable(&self.config.probe_addr, self.config.probe_timeout).await {
            let next = FetchState::Failed {
                message: "No internet connection. Try loading saved data from file.".to_string(),
            };
            self.set_state(next.clone()).await;
            return next;
        }

        *gate = Some(Instant::now());
        self.set_state(FetchState::Loading).await;
        self.fetch_and_persist().await
    }

    /// Load whatever snapshot exists, regardless of age
    ///
    /// Never touches the network.
    pub async fn load_saved(&self) -> FetchState {
        let _gate = self.gate.lock().await;

        let next = match self.store.load_any() {
            Some((coins, captured_at)) => {
                info!("Restored snapshot from file, captured {}", captured_at);
                FetchState::Ready {
                    coins,
                    captured_at: Some(captured_at),
                    origin: DataOrigin::File,
                    notice: format!(
                        "Data restored from file (saved {})",
                        captured_at.format("%d.%m.%Y %H:%M")
                    ),
                }
            }
            None => FetchState::Failed {
                message: "No local data found or the file is empty.".to_string(),
            },
        };

        self.set_state(next.clone()).await;
        next
    }

    async fn fetch_and_persist(&self) -> FetchState {
        let next = match self.client.fetch_coins().await {
            Ok(coins) => {
                let notice = if self.store.save(&coins) {
                    "Data updated and saved".to_string()
                } else {
                    warn!("Snapshot save failed; showing fetched data without persistence");
                    "Data updated (saving failed)".to_string()
                };
                FetchState::Ready {
                    coins,
                    captured_at: Some(Utc::now()),
                    origin: DataOrigin::Network,
                    notice,
                }
            }
            Err(err) => FetchState::Failed {
                message: err.to_string(),
            },
        };

        self.set_state(next.clone()).await;
        next
    }
}
