pub mod clear;
pub mod prices;
pub mod refresh;
pub mod saved;
pub mod settings;
pub mod show;
pub mod status;
pub mod watch;

use crate::error::{AppError, Result};
use crate::services::{CacheCoordinator, DataOrigin, FetchState, MarketClient, Settings, SnapshotStore};
use std::path::Path;

/// Assemble a coordinator over the production endpoint and the given data dir
pub(crate) fn build_coordinator(data_dir: &Path) -> Result<CacheCoordinator> {
    let client = MarketClient::with_default_endpoint()
        .map_err(|e| AppError::Network(e.to_string()))?;
    let store = SnapshotStore::in_dir(data_dir);
    Ok(CacheCoordinator::new(client, store))
}

/// Render a coordinator state the way the list view would
pub(crate) fn print_state(state: &FetchState, settings: &Settings) {
    match state {
        FetchState::Ready { coins, captured_at, origin, notice } => {
            let origin_label = match origin {
                DataOrigin::Cache => "fresh cache",
                DataOrigin::Network => "network",
                DataOrigin::File => "saved file",
            };
            println!("📊 {} coins (source: {})", coins.len(), origin_label);
            if let Some(at) = captured_at {
                println!("   Captured: {}", at.format("%d.%m.%Y %H:%M"));
            }
            for coin in coins {
                if settings.show_price_in_list {
                    println!("   {:<10} {:<10} ${:.2}", coin.id, coin.name, coin.price);
                } else {
                    println!("   {:<10} {}", coin.id, coin.name);
                }
            }
            println!("💡 {}", notice);
        }
        FetchState::Failed { message } => println!("❌ {}", message),
        FetchState::Idle => println!("(idle)"),
        FetchState::Loading => println!("(loading)"),
    }
}
