use crate::errors::{AppError, AppResult};
use crate::models::work_policy::WorkPolicy;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_work_duration")]
    pub work_duration: String,
    #[serde(default)]
    pub wrap_hours: bool,
    #[serde(default = "default_display_suffix")]
    pub display_suffix: String,
    #[serde(default = "default_log_calculations")]
    pub log_calculations: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_work_duration() -> String {
    "8h30m".to_string()
}
fn default_display_suffix() -> String {
    "PM".to_string()
}
fn default_log_calculations() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            work_duration: default_work_duration(),
            wrap_hours: false,
            display_suffix: default_display_suffix(),
            log_calculations: default_log_calculations(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rlogout")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rlogout")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rlogout.conf")
    }

    /// Return the full path of the SQLite database holding the internal log
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rlogout.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// The configured work policy.
    pub fn policy(&self) -> AppResult<WorkPolicy> {
        WorkPolicy::parse(&self.work_duration)
    }

    /// Database path with a leading `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Resolve a user supplied database path: `~/` is expanded and a
    /// relative name lands in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // the database file and its directory are created by DbPool::new
        Ok(config)
    }
}
