// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's locale configuration, including
//! loading and saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use locale_route::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Override the default locale
//! config.default_locale = Some("zh".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{DEFAULT_LOCALE, DEFAULT_SUPPORTED_LOCALES};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LocaleRoute";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fallback locale applied when a request carries no locale of its own.
    pub default_locale: Option<String>,
    /// Locales the application accepts; requests for anything else get a 404.
    #[serde(default)]
    pub supported_locales: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Some(DEFAULT_LOCALE.to_string()),
            supported_locales: Some(
                DEFAULT_SUPPORTED_LOCALES
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            ),
        }
    }
}

impl Config {
    /// Effective default locale, falling back to the built-in one.
    pub fn effective_default_locale(&self) -> &str {
        self.default_locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Effective supported locale codes, falling back to the built-in set.
    pub fn effective_supported_locales(&self) -> Vec<String> {
        match &self.supported_locales {
            Some(locales) if !locales.is_empty() => locales.clone(),
            _ => DEFAULT_SUPPORTED_LOCALES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
