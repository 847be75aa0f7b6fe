//! Server configuration
//!
//! Loaded from a TOML file; every field has a default so a missing or
//! partial file still produces a working server.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// TCP port to listen on
    pub port: u16,

    /// Database file location; defaults to the platform data directory
    pub database_path: Option<PathBuf>,

    /// UTC hour (0-23) at which the daily purge runs
    pub purge_hour: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: atrium_net::DEFAULT_PORT,
            database_path: None,
            purge_hour: 0,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                    Settings::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "No config file, using defaults");
                Settings::default()
            }
        };

        if settings.purge_hour > 23 {
            warn!(
                purge_hour = settings.purge_hour,
                "purge_hour out of range, using 0"
            );
            settings.purge_hour = 0;
        }

        settings
    }
}
