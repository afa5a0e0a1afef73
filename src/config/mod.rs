use crate::core::logic::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::errors::{AppError, AppResult};
use crate::export::DEFAULT_EXPORT_FILE;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Fields written by `init`; used by `config --check`.
pub const CONFIG_FIELDS: [&str; 4] = ["record_count", "page_size", "export_file", "seed"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of synthetic shift records generated at start-up
    #[serde(default = "default_record_count")]
    pub record_count: usize,
    /// Rows per page in `list` (10, 20 or 50)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Default CSV export target
    #[serde(default = "default_export_file")]
    pub export_file: String,
    /// Fixed seed for a reproducible dataset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_record_count() -> usize {
    100
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_count: default_record_count(),
            page_size: default_page_size(),
            export_file: default_export_file(),
            seed: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rpayroll")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpayroll.conf")
    }

    /// Load configuration from `path`, or defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration file, creating its directory
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Names of known fields absent from a YAML document.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(content)?
        };

        let present = |key: &str| {
            value
                .as_mapping()
                .is_some_and(|m| m.contains_key(key))
        };

        Ok(CONFIG_FIELDS.into_iter().filter(|k| !present(*k)).collect())
    }

    /// Reject page sizes the table does not offer.
    pub fn validate(&self) -> AppResult<()> {
        if !PAGE_SIZES.contains(&self.page_size) {
            return Err(AppError::InvalidPageSize(self.page_size));
        }
        if self.export_file.trim().is_empty() {
            return Err(AppError::Config("export_file must not be empty".into()));
        }
        Ok(())
    }
}
