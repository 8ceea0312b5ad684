use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::constants::DEFAULT_WATCH_INTERVAL_SECS;
use crate::utils::get_data_dir;

#[derive(Parser)]
#[command(name = "coinwatch")]
#[command(about = "Live crypto prices with an offline snapshot cache", long_about = None)]
pub struct Cli {
    /// Directory holding the snapshot slot and settings
    /// (defaults to $COINWATCH_DATA_DIR, then ./coinwatch_data)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show current prices, preferring a fresh cached snapshot
    Prices,
    /// Force a network refresh (connectivity-gated, debounced)
    Refresh,
    /// Keep refreshing on an interval
    Watch {
        /// Seconds between refresh attempts
        #[arg(long, default_value_t = DEFAULT_WATCH_INTERVAL_SECS)]
        interval: u64,
    },
    /// Show the saved snapshot regardless of its age
    Saved,
    /// Show details for one coin
    Show {
        /// Coin identifier, e.g. "bitcoin"
        id: String,
    },
    /// Show cache slot diagnostics and current settings
    Status,
    /// Delete the saved snapshot
    Clear,
    /// Read or change display preferences
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print current settings
    Show,
    /// Change one setting (theme, font-size, dark-mode, show-price)
    Set { field: String, value: String },
}

pub async fn run() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(get_data_dir);

    let result = match cli.command {
        Commands::Prices => commands::prices::run(&data_dir).await,
        Commands::Refresh => commands::refresh::run(&data_dir).await,
        Commands::Watch { interval } => commands::watch::run(&data_dir, interval).await,
        Commands::Saved => commands::saved::run(&data_dir).await,
        Commands::Show { id } => commands::show::run(&data_dir, &id).await,
        Commands::Status => commands::status::run(&data_dir),
        Commands::Clear => commands::clear::run(&data_dir),
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&data_dir),
            SettingsAction::Set { field, value } => {
                commands::settings::set(&data_dir, &field, &value)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
