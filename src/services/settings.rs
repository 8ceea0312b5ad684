//! Persisted display preferences
//!
//! Four independent scalar settings backed by one JSON file. Each setter
//! mutates the in-memory value and synchronously persists the whole file,
//! returning the outcome. Loading is lenient per field: an absent or
//! unparsable value falls back to that field's default without touching the
//! others.

use crate::constants::SETTINGS_FILE_NAME;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Accent color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Red,
}

impl ColorTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Purple => "purple",
            ColorTheme::Green => "green",
            ColorTheme::Orange => "orange",
            ColorTheme::Red => "red",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(ColorTheme::Blue),
            "purple" => Some(ColorTheme::Purple),
            "green" => Some(ColorTheme::Green),
            "orange" => Some(ColorTheme::Orange),
            "red" => Some(ColorTheme::Red),
            _ => None,
        }
    }
}

/// Display font size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(FontSize::Small),
            "medium" => Some(FontSize::Medium),
            "large" => Some(FontSize::Large),
            _ => None,
        }
    }
}

/// Current preference values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub theme: ColorTheme,
    pub font_size: FontSize,
    pub dark_mode: bool,
    pub show_price_in_list: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            font_size: FontSize::default(),
            dark_mode: false,
            show_price_in_list: true,
        }
    }
}

/// Store binding the settings to their file
pub struct SettingsStore {
    path: PathBuf,
    current: Settings,
}

impl SettingsStore {
    /// Open a store over an explicit file path, loading leniently
    pub fn open(path: PathBuf) -> Self {
        let current = load_lenient(&path);
        Self { path, current }
    }

    /// Open a store over the default settings file inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::open(dir.join(SETTINGS_FILE_NAME))
    }

    pub fn settings(&self) -> &Settings {
        &self.current
    }

    pub fn set_theme(&mut self, theme: ColorTheme) -> Result<()> {
        self.current.theme = theme;
        self.persist()
    }

    pub fn set_font_size(&mut self, font_size: FontSize) -> Result<()> {
        self.current.font_size = font_size;
        self.persist()
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<()> {
        self.current.dark_mode = dark_mode;
        self.persist()
    }

    pub fn set_show_price_in_list(&mut self, show: bool) -> Result<()> {
        self.current.show_price_in_list = show;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.current)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::Io(format!("create {}: {}", parent.display(), e)))?;
            }
        }

        fs::write(&self.path, json)
            .map_err(|e| AppError::Io(format!("write {}: {}", self.path.display(), e)))?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

fn load_lenient(path: &Path) -> Settings {
    let defaults = Settings::default();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!("No settings at {}, using defaults", path.display());
            return defaults;
        }
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Malformed settings file {}: {}. Using defaults.", path.display(), e);
            return defaults;
        }
    };

    Settings {
        theme: value
            .get("theme")
            .and_then(Value::as_str)
            .and_then(ColorTheme::parse)
            .unwrap_or(defaults.theme),
        font_size: value
            .get("font_size")
            .and_then(Value::as_str)
            .and_then(FontSize::parse)
            .unwrap_or(defaults.font_size),
        dark_mode: value
            .get("dark_mode")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.dark_mode),
        show_price_in_list: value
            .get("show_price_in_list")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.show_price_in_list),
    }
}
