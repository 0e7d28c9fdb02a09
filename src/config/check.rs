//! Detect keys missing from the configuration file.
//! Missing keys still work (defaults apply) but are reported so the user
//! can add them explicitly.

use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub const KNOWN_KEYS: [&str; 5] = [
    "database",
    "work_duration",
    "wrap_hours",
    "display_suffix",
    "log_calculations",
];

/// Keys of [`KNOWN_KEYS`] absent from the given YAML text.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?
    };

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("top level is not a mapping".into()))?;

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Keys of [`KNOWN_KEYS`] absent from the configuration file at `path`.
pub fn missing_keys_in_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    missing_keys(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_absent_keys() {
        let yaml = "database: /tmp/x.sqlite\nwork_duration: 8h\nwrap_hours: false\n";
        assert_eq!(
            missing_keys(yaml).unwrap(),
            vec!["display_suffix", "log_calculations"]
        );
    }

    #[test]
    fn complete_file_has_nothing_missing() {
        let cfg = crate::config::Config::default();
        assert!(missing_keys(&cfg.to_yaml().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn non_mapping_is_rejected() {
        assert!(missing_keys("- a\n- b\n").is_err());
    }
}
