use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::expense::DEFAULT_CURRENCY_SUFFIX;
use crate::errors::Result;

const CONFIG_DIR: &str = "expense_report";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Report preferences. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_suffix")]
    pub currency_suffix: String,
    /// Screen logging for filters that leave `log_to_screen` unset.
    #[serde(default)]
    pub log_to_screen: bool,
    #[serde(default = "Config::default_log_directive")]
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_suffix: Self::default_currency_suffix(),
            log_to_screen: false,
            log_directive: Self::default_log_directive(),
        }
    }
}

impl Config {
    pub fn default_currency_suffix() -> String {
        DEFAULT_CURRENCY_SUFFIX.into()
    }

    pub fn default_log_directive() -> String {
        "expense_report=info".into()
    }
}

/// Loads and saves [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `<base>/config/config.json`.
    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    /// Platform config directory, falling back to the working directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
