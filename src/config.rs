use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::band::Band;
use crate::form::{FormDefaults, MAX_DAILY_HOURS, MIN_DAILY_HOURS};

/// Starting values for the input form, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub current_band: f64,
    pub target_band: f64,
    pub days_left: u32,
    pub daily_hours: f64,
}

impl Default for Config {
    fn default() -> Self {
        FormDefaults::default().into()
    }
}

impl From<FormDefaults> for Config {
    fn from(d: FormDefaults) -> Self {
        Self {
            current_band: d.current_band.as_f64(),
            target_band: d.target_band.as_f64(),
            days_left: d.days_left,
            daily_hours: d.daily_hours,
        }
    }
}

impl Config {
    /// Converts to form defaults. Bands off the half-band grid or outside
    /// the scale, and hours out of range, fall back to the built-in value.
    /// Days are taken as-is; the form validates them on submit.
    pub fn form_defaults(&self) -> FormDefaults {
        let fallback = FormDefaults::default();
        let band = |value: f64, name: &str, default: Band| {
            Band::from_f64(value).unwrap_or_else(|| {
                warn!(field = name, value, "ignoring invalid band in config");
                default
            })
        };
        let daily_hours = if (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            self.daily_hours
        } else {
            warn!(value = self.daily_hours, "ignoring invalid daily_hours in config");
            fallback.daily_hours
        };
        FormDefaults {
            current_band: band(self.current_band, "current_band", fallback.current_band),
            target_band: band(self.target_band, "target_band", fallback.target_band),
            days_left: self.days_left,
            daily_hours,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "malformed config, using defaults");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
