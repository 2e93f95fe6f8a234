use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use wayfarer_core::phrasebook::domain::phrasebook::ReplyStyle;
use wayfarer_core::shared::constants::{
    DEFAULT_EUR_TO_JPY_RATE, DEFAULT_TRANSLATION_CACHE_CAPACITY,
};
use wayfarer_core::shared::language::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub eur_to_jpy_rate: f64,
    pub trip_start_date: Option<NaiveDate>,
    pub cache_capacity: usize,
    pub reply_style: ReplyStyle,
    pub source_language: Language,
    pub phrasebook_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            eur_to_jpy_rate: DEFAULT_EUR_TO_JPY_RATE,
            trip_start_date: None,
            cache_capacity: DEFAULT_TRANSLATION_CACHE_CAPACITY,
            reply_style: ReplyStyle::Polite,
            source_language: Language::Auto,
            phrasebook_path: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Wayfarer").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Missing or unreadable files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("could not determine config directory")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::debug!("Settings saved to {}", path.display());
        Ok(())
    }
}
