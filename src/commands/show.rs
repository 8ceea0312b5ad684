use crate::commands::build_coordinator;
use crate::error::{AppError, Result};
use crate::services::FetchState;
use crate::utils::format_magnitude;
use std::path::Path;

/// Detail view for one coin from the freshest available snapshot
pub async fn run(data_dir: &Path, id: &str) -> Result<()> {
    let coordinator = build_coordinator(data_dir)?;

    match coordinator.start().await {
        FetchState::Ready { coins, .. } => {
            let coin = coins.iter().find(|c| c.id == id).ok_or_else(|| {
                AppError::NotFound(format!("coin '{}' not in the current snapshot", id))
            })?;

            println!("Name: {}", coin.name);
            println!("Price: ${:.2} USD", coin.price);
            println!("Market cap: ${}", format_magnitude(coin.market_cap));
            println!("24h high: ${:.2}", coin.high_24h);
            println!("24h low: ${:.2}", coin.low_24h);
            Ok(())
        }
        FetchState::Failed { message } => Err(AppError::Network(message)),
        _ => Err(AppError::Config("coordinator did not settle".to_string())),
    }
}
