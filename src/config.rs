/// Runtime configuration read from environment variables
use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_BIRTH_COLUMN, DEFAULT_GRIST_BASE_URL, DEFAULT_GRIST_DOC_ID, DEFAULT_GRIST_TABLE_ID,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_NAME_COLUMN, DEFAULT_VK_API_URL, DEFAULT_VK_API_VERSION,
    DEFAULT_VK_OWNER_ID,
};
use crate::error::ConfigError;
use crate::services::birthday_service::RosterColumns;

/// Settings for reading the roster from Grist
#[derive(Clone)]
pub struct GristConfig {
    /// Bearer token; `None` makes every fetch fail with a missing credential
    pub api_key: Option<String>,
    pub base_url: Url,
    pub doc_id: String,
    pub table_id: String,
    pub columns: RosterColumns,
}

/// Settings for posting to the VK wall
#[derive(Clone)]
pub struct VkConfig {
    /// Access token; `None` makes every publish fail with a missing credential
    pub access_token: Option<String>,
    pub api_url: Url,
    pub owner_id: i64,
    pub api_version: String,
}

/// Everything a run needs
#[derive(Clone)]
pub struct Config {
    pub grist: GristConfig,
    pub vk: VkConfig,
    pub http_timeout: Duration,
}

impl std::fmt::Debug for GristConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GristConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url.as_str())
            .field("doc_id", &self.doc_id)
            .field("table_id", &self.table_id)
            .field("columns", &self.columns)
            .finish()
    }
}

impl std::fmt::Debug for VkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VkConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url.as_str())
            .field("owner_id", &self.owner_id)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("grist", &self.grist)
            .field("vk", &self.vk)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset. Missing credentials are not an
    /// error here: they surface as `MissingCredential` when a collaborator
    /// is used.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let get_or =
            |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        let grist = GristConfig {
            api_key: get("GRIST_API_KEY"),
            base_url: parse_url(
                "GRIST_BASE_URL",
                &get_or("GRIST_BASE_URL", DEFAULT_GRIST_BASE_URL),
            )?,
            doc_id: get_or("GRIST_DOC_ID", DEFAULT_GRIST_DOC_ID),
            table_id: get_or("GRIST_TABLE_ID", DEFAULT_GRIST_TABLE_ID),
            columns: RosterColumns {
                name: get_or("GRIST_NAME_COLUMN", DEFAULT_NAME_COLUMN),
                birth_date: get_or("GRIST_BIRTH_COLUMN", DEFAULT_BIRTH_COLUMN),
            },
        };

        let owner_id = match get("VK_OWNER_ID") {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidInteger {
                    name: "VK_OWNER_ID",
                    value: raw.clone(),
                })?,
            None => DEFAULT_VK_OWNER_ID,
        };

        let vk = VkConfig {
            access_token: get("VK_ACCESS_TOKEN"),
            api_url: parse_url("VK_API_URL", &get_or("VK_API_URL", DEFAULT_VK_API_URL))?,
            owner_id,
            api_version: get_or("VK_API_VERSION", DEFAULT_VK_API_VERSION),
        };

        let timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidInteger {
                    name: "HTTP_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Config {
            grist,
            vk,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.grist.api_key, None);
        assert_eq!(config.grist.base_url.as_str(), "https://docs.getgrist.com/");
        assert_eq!(config.grist.doc_id, "4w9eBjjxRqUh");
        assert_eq!(config.grist.table_id, "Folks");
        assert_eq!(config.grist.columns.name, "Name");
        assert_eq!(config.grist.columns.birth_date, "DoB");
        assert_eq!(config.vk.access_token, None);
        assert_eq!(config.vk.owner_id, -227823182);
        assert_eq!(config.vk.api_version, "5.131");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("GRIST_API_KEY", "grist-secret"),
            ("GRIST_DOC_ID", "doc1"),
            ("GRIST_TABLE_ID", "People"),
            ("GRIST_BIRTH_COLUMN", "Birthday"),
            ("VK_ACCESS_TOKEN", "vk-secret"),
            ("VK_OWNER_ID", "-42"),
            ("HTTP_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.grist.api_key.as_deref(), Some("grist-secret"));
        assert_eq!(config.grist.doc_id, "doc1");
        assert_eq!(config.grist.table_id, "People");
        assert_eq!(config.grist.columns.birth_date, "Birthday");
        assert_eq!(config.vk.access_token.as_deref(), Some("vk-secret"));
        assert_eq!(config.vk.owner_id, -42);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_credentials_are_treated_as_missing() {
        let config = Config::from_lookup(lookup_from(&[
            ("GRIST_API_KEY", "   "),
            ("VK_ACCESS_TOKEN", ""),
        ]))
        .unwrap();

        assert_eq!(config.grist.api_key, None);
        assert_eq!(config.vk.access_token, None);
    }

    #[test]
    fn test_invalid_owner_id_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("VK_OWNER_ID", "club42")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidInteger {
                name: "VK_OWNER_ID",
                value: "club42".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("GRIST_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { name: "GRIST_BASE_URL", .. }));
    }

    #[test]
    fn test_debug_output_redacts_tokens() {
        let config = Config::from_lookup(lookup_from(&[
            ("GRIST_API_KEY", "grist-secret"),
            ("VK_ACCESS_TOKEN", "vk-secret"),
        ]))
        .unwrap();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("grist-secret"));
        assert!(!rendered.contains("vk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
