//! Runtime settings, read from `climbr.toml` with environment overrides.
//!
//! ```toml
//! site_url = "https://climbr.app"
//! share_click_points = 5
//! table_buffer = 32
//! ```
//!
//! Every field is optional. Environment variables `CLIMBR_SITE_URL`,
//! `CLIMBR_SHARE_CLICK_POINTS` and `CLIMBR_TABLE_BUFFER` override the file.

use crate::model::ProductId;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClimbrConfig {
    /// Base of canonical product page addresses.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Points credited per click on a shared link.
    #[serde(default = "default_share_click_points")]
    pub share_click_points: u32,
    /// Channel capacity of each in-process table.
    #[serde(default = "default_table_buffer")]
    pub table_buffer: usize,
}

fn default_site_url() -> String {
    "https://climbr.app".to_string()
}

fn default_share_click_points() -> u32 {
    5
}

fn default_table_buffer() -> usize {
    32
}

impl Default for ClimbrConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            share_click_points: default_share_click_points(),
            table_buffer: default_table_buffer(),
        }
    }
}

impl ClimbrConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Applies `CLIMBR_*` variables from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup, keyed by environment variable name.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CLIMBR_SITE_URL") {
            self.site_url = url;
        }
        if let Some(raw) = lookup("CLIMBR_SHARE_CLICK_POINTS") {
            self.share_click_points = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "CLIMBR_SHARE_CLICK_POINTS",
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup("CLIMBR_TABLE_BUFFER") {
            self.table_buffer = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "CLIMBR_TABLE_BUFFER",
                value: raw.clone(),
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.site_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                key: "site_url",
                value: self.site_url.clone(),
            });
        }
        // mpsc::channel panics on zero capacity
        if self.table_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                key: "table_buffer",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Canonical page address of a product, the text the share action copies.
    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/product/{}", self.site_url.trim().trim_end_matches('/'), id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ClimbrConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClimbrConfig::default());
        assert_eq!(config.share_click_points, 5);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = ClimbrConfig::from_toml_str(
            r#"
            site_url = "http://localhost:5173/"
            share_click_points = 10
            table_buffer = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.share_click_points, 10);
        assert_eq!(config.table_buffer, 4);
        assert_eq!(config.product_url(&ProductId(9)), "http://localhost:5173/product/9");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ClimbrConfig::from_toml_str("table_buffer = 0"),
            Err(ConfigError::InvalidValue { key: "table_buffer", .. })
        ));
        assert!(matches!(
            ClimbrConfig::from_toml_str(r#"site_url = "climbr.app""#),
            Err(ConfigError::InvalidValue { key: "site_url", .. })
        ));
        assert!(matches!(
            ClimbrConfig::from_toml_str("share_click_points = \"lots\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("CLIMBR_SITE_URL", "https://staging.climbr.app"),
            ("CLIMBR_SHARE_CLICK_POINTS", "7"),
        ]
        .into_iter()
        .collect();
        let config = ClimbrConfig::default()
            .with_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.site_url, "https://staging.climbr.app");
        assert_eq!(config.share_click_points, 7);
        assert_eq!(config.table_buffer, 32);
    }

    #[test]
    fn test_override_with_garbage_is_an_error() {
        let err = ClimbrConfig::default()
            .with_overrides_from(|key| (key == "CLIMBR_TABLE_BUFFER").then(|| "many".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("CLIMBR_TABLE_BUFFER"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClimbrConfig::load(Path::new("/definitely/not/here/climbr.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
