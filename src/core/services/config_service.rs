use crate::AppError;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::utils::validation::{parse_positive, validate_url};
use std::path::PathBuf;

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: [&str; 4] = ["url", "page-size", "notification-secs", "timeout-secs"];

/// Reads and edits the on-disk configuration.
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate and apply one `key = value` setting.
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match key {
            "url" => {
                let url = value.trim_end_matches('/');
                validate_url(url)?;
                self.config.set_url(url.to_string());
            }
            "page-size" => {
                let n = parse_positive(key, value)?;
                let n = u32::try_from(n).map_err(|_| ConfigError::InvalidValue {
                    field: key.to_string(),
                    value: value.to_string(),
                    reason: "too large".to_string(),
                })?;
                self.config.page_size = Some(n);
            }
            "notification-secs" => {
                self.config.notification_secs = Some(parse_positive(key, value)?);
            }
            "timeout-secs" => {
                self.config.timeout_secs = Some(parse_positive(key, value)?);
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }

    /// `(key, effective value, origin)` rows for `config show`.
    pub fn effective_settings(&self) -> Vec<(&'static str, String, &'static str)> {
        let origin = |set: bool| if set { "config" } else { "default" };
        let url_origin = if self.config.url.is_some() {
            "config"
        } else if self.config.get_url().is_some() {
            "env"
        } else {
            "default"
        };

        vec![
            ("url", self.config.resolved_url(), url_origin),
            (
                "page-size",
                self.config.page_size().to_string(),
                origin(self.config.page_size.is_some()),
            ),
            (
                "notification-secs",
                self.config.notification_ttl().as_secs().to_string(),
                origin(self.config.notification_secs.is_some()),
            ),
            (
                "timeout-secs",
                self.config.timeout_secs().to_string(),
                origin(self.config.timeout_secs.is_some()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_known_keys() {
        let mut service = ConfigService::new(Config::default());
        service.set_key("url", "https://invoices.example.com/").unwrap();
        service.set_key("page-size", "10").unwrap();
        service.set_key("notification-secs", "7").unwrap();
        service.set_key("timeout-secs", "5").unwrap();

        let config = service.config();
        assert_eq!(config.url.as_deref(), Some("https://invoices.example.com"));
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.notification_ttl().as_secs(), 7);
        assert_eq!(config.timeout_secs(), 5);
    }

    #[test]
    fn test_rejects_unknown_key() {
        let mut service = ConfigService::new(Config::default());
        let result = service.set_key("page_size", "10");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::UnknownKey { .. }))
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut service = ConfigService::new(Config::default());
        assert!(service.set_key("page-size", "0").is_err());
        assert!(service.set_key("timeout-secs", "soon").is_err());
        assert!(service.set_key("url", "invoices.example.com").is_err());
        assert_eq!(service.config(), &Config::default());
    }

    #[test]
    fn test_save_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = Config::file_in(dir.path());

        let mut service = ConfigService::new(Config::default());
        service.set_key("page-size", "50").unwrap();
        service.save_config(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded.page_size, Some(50));
    }

    #[test]
    fn test_effective_settings_marks_defaults() {
        let service = ConfigService::new(Config {
            page_size: Some(10),
            ..Default::default()
        });
        let rows = service.effective_settings();
        let page = rows.iter().find(|(k, _, _)| *k == "page-size").unwrap();
        assert_eq!(page.1, "10");
        assert_eq!(page.2, "config");
        let timeout = rows.iter().find(|(k, _, _)| *k == "timeout-secs").unwrap();
        assert_eq!(timeout.2, "default");
    }
}
