// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification manager's configuration, including
//! loading and saving it to a `notifications.toml` file.
//!
//! Most fields are passed through untouched to the rendering layer. The
//! manager itself only reads the default timeout and the icon overrides.
//!
//! # Examples
//!
//! ```no_run
//! use editor_notifications::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Auto-dismiss notifications after five seconds by default
//! config.timeout_ms = Some(5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::notifications::Icons;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use defaults::{APP_NAME, CONFIG_FILE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identifier of the DOM element hosting the toasts.
    pub container: Option<String>,
    /// Upper bound on displayed notifications. Enforced by renderers only.
    pub max_notifications: Option<usize>,
    /// Display newest first.
    pub reverse: bool,
    /// Auto-dismiss delay applied when a notification has none of its own.
    pub timeout_ms: Option<u64>,
    /// Key under which the host may persist notifications.
    pub store_key: Option<String>,
    /// Icon overrides merged over the built-in glyphs.
    pub icons: Icons,
}

impl Config {
    /// Returns the default auto-dismiss delay, ignoring zero.
    #[must_use]
    pub fn default_timeout(&self) -> Option<Duration> {
        self.timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
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
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid notification config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
