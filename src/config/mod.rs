use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::errors::ConfigError;
use crate::format::LocaleConfig;

const APP_DIR: &str = "listing_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Persisted user preferences for the wizard CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub submit_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "SAR".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            submit_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            language_tag: self.locale.clone(),
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
        }
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }
}

/// Loads and saves the config file under the platform config directory.
/// Saves go through a temp file and a rename so a crash never leaves a
/// half-written config behind.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self {
            path: base.join(APP_DIR).join(CONFIG_FILE),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
