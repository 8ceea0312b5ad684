pub mod connectivity;
pub mod coordinator;
pub mod market_client;
pub mod settings;
pub mod snapshot_store;

pub use connectivity::is_reachable;
pub use coordinator::{CacheCoordinator, CoordinatorConfig, DataOrigin, FetchState};
pub use market_client::{FetchError, MarketClient};
pub use settings::{ColorTheme, FontSize, Settings, SettingsStore};
pub use snapshot_store::{SlotInfo, SnapshotStore};
