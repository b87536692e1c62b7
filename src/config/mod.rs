use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::services::summary_service::DEFAULT_RECENT_LIMIT,
    errors::LedgerError,
    ledger::{sample, Ledger},
    utils,
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub ledger_name: String,
    pub recent_limit: usize,
    pub seed_sample_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_name: "Personal".into(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            seed_sample_data: false,
            log_filter: None,
        }
    }
}

impl Config {
    /// Creates the in-memory ledger described by this configuration.
    pub fn open_ledger(&self) -> Result<Ledger, LedgerError> {
        let mut ledger = Ledger::new(self.ledger_name.clone());
        if self.seed_sample_data {
            sample::seed(&mut ledger)?;
        }
        Ok(ledger)
    }

    fn validate(&self) -> Result<(), LedgerError> {
        if self.ledger_name.trim().is_empty() {
            return Err(LedgerError::Config("ledger_name must not be empty".into()));
        }
        if self.recent_limit == 0 {
            return Err(LedgerError::Config(
                "recent_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: utils::config_file_in(base.as_ref()),
        }
    }

    /// Reads the configuration file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
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

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
