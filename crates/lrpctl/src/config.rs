//! lrpctl.toml configuration parser.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lrpctl.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CtlConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    /// redb file holding the namespace.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogConfig {
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("lrpgrid.redb")
}

fn default_log_filter() -> String {
    "warn,lrpctl=info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl CtlConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CtlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit config file, or `lrpctl.toml` if present, or defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: CtlConfig = toml::from_str(
            r#"
[store]
path = "/var/lib/lrpgrid/state.redb"

[log]
filter = "debug"
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.store.path, PathBuf::from("/var/lib/lrpgrid/state.redb"));
        assert_eq!(config.log.filter, "debug");
        assert!(config.log.json);
    }

    #[test]
    fn missing_sections_default() {
        let config: CtlConfig = toml::from_str("[log]\njson = true\n").unwrap();
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.log.filter, "warn,lrpctl=info");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CtlConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lrpctl.toml");
        std::fs::write(&path, "[store]\npath = \"x.redb\"\n").unwrap();
        let config = CtlConfig::load(Some(&path)).unwrap();
        assert_eq!(config.store.path, PathBuf::from("x.redb"));
    }
}
