use crate::error::{AppError, Result};
use crate::services::{ColorTheme, FontSize, SettingsStore};
use std::path::Path;

/// Print current settings
pub fn show(data_dir: &Path) -> Result<()> {
    let store = SettingsStore::in_dir(data_dir);
    let s = store.settings();

    println!("⚙️  Settings:");
    println!("   theme = {}", s.theme.as_str());
    println!("   font-size = {}", s.font_size.as_str());
    println!("   dark-mode = {}", s.dark_mode);
    println!("   show-price = {}", s.show_price_in_list);
    Ok(())
}

/// Change one setting and persist it
pub fn set(data_dir: &Path, field: &str, value: &str) -> Result<()> {
    let mut store = SettingsStore::in_dir(data_dir);

    match field {
        "theme" => {
            let theme = ColorTheme::parse(value)
                .ok_or_else(|| AppError::InvalidInput(format!("unknown theme '{}'", value)))?;
            store.set_theme(theme)?;
        }
        "font-size" | "font_size" => {
            let size = FontSize::parse(value)
                .ok_or_else(|| AppError::InvalidInput(format!("unknown font size '{}'", value)))?;
            store.set_font_size(size)?;
        }
        "dark-mode" | "dark_mode" => {
            store.set_dark_mode(parse_bool(value)?)?;
        }
        "show-price" | "show_price_in_list" => {
            store.set_show_price_in_list(parse_bool(value)?)?;
        }
        other => {
            return Err(AppError::InvalidInput(format!("unknown setting '{}'", other)));
        }
    }

    println!("💾 Saved {} = {}", field, value);
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .map_err(|_| AppError::InvalidInput(format!("expected true or false, got '{}'", value)))
}
