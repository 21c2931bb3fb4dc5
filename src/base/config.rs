//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::{AppConfig, Res};

/// Model used for both analysis and drafting unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// OpenAI-compatible endpoint of the hosted model.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default API base.
fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Default model.
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Default company name used in the drafter's persona.
fn default_company_name() -> String {
    "QueueSense".to_string()
}

/// Default sampling temperature for the analyzer.
fn default_analyzer_temperature() -> f32 {
    0.0
}

/// Default sampling temperature for the drafter.
fn default_drafter_temperature() -> f32 {
    0.7
}

/// Configuration for the ticket assist layer.
///
/// This is trivially cloneable and is passed explicitly to every assist call.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Shared configuration values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Configuration values.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// API key for the hosted model (`TICKET_ASSIST_API_KEY`).
    ///
    /// When absent, every assist call short-circuits to "unavailable".
    #[serde(default)]
    pub api_key: Option<String>,
    /// OpenAI-compatible API base URL (`TICKET_ASSIST_API_BASE`).
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model identifier (`TICKET_ASSIST_MODEL`).
    #[serde(default = "default_model")]
    pub model: String,
    /// Company name the drafter speaks for (`TICKET_ASSIST_COMPANY_NAME`).
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// Sampling temperature for analysis (`TICKET_ASSIST_ANALYZER_TEMPERATURE`).
    /// Value between 0 and 2.
    #[serde(default = "default_analyzer_temperature")]
    pub analyzer_temperature: f32,
    /// Sampling temperature for drafting (`TICKET_ASSIST_DRAFTER_TEMPERATURE`).
    /// Value between 0 and 2.
    #[serde(default = "default_drafter_temperature")]
    pub drafter_temperature: f32,
    /// Operator tone and knowledge settings (`TICKET_ASSIST_APP__BRAND_TONE`, etc.).
    #[serde(default)]
    pub app: AppConfig,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            company_name: default_company_name(),
            analyzer_temperature: default_analyzer_temperature(),
            drafter_temperature: default_drafter_temperature(),
            app: AppConfig::default(),
        }
    }
}

impl ConfigInner {
    /// The configured API key, if there is a non-blank one.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }
}

impl Config {
    /// Wrap a set of configuration values.
    pub fn new(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Load the configuration from the environment and an optional TOML file.
    ///
    /// Environment variables take the `TICKET_ASSIST_` prefix; nested keys use `__`.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::with_prefix("TICKET_ASSIST").prefix_separator("_").separator("__"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config::new(cfg.build()?.try_deserialize()?);

        result.validate()?;

        Ok(result)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Res<()> {
        if self.analyzer_temperature < 0.0 || self.analyzer_temperature > 2.0 {
            return Err(anyhow::anyhow!("Analyzer temperature must be between 0 and 2."));
        }

        if self.drafter_temperature < 0.0 || self.drafter_temperature > 2.0 {
            return Err(anyhow::anyhow!("Drafter temperature must be between 0 and 2."));
        }

        if self.model.trim().is_empty() {
            return Err(anyhow::anyhow!("Model must not be empty."));
        }

        if self.api_base.trim().is_empty() {
            return Err(anyhow::anyhow!("API base must not be empty."));
        }

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = Config::new(ConfigInner {
            api_key: Some("   ".to_string()),
            ..Default::default()
        });

        assert_eq!(config.credential(), None);
    }

    #[test]
    fn test_api_key_is_trimmed() {
        let config = Config::new(ConfigInner {
            api_key: Some(" abc123 \n".to_string()),
            ..Default::default()
        });

        assert_eq!(config.credential(), Some("abc123"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let config = Config::new(ConfigInner {
            drafter_temperature: 2.5,
            ..Default::default()
        });

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.app.brand_tone, "Friendly");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let path = std::env::temp_dir().join(format!("ticket-assist-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
api_key = "file-key"
model = "gemini-2.5-pro"

[app]
brand_tone = "Formal"
tone_description = "Precise and courteous."
knowledge_context = "Invoices are issued on the 1st."
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.credential(), Some("file-key"));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.app.brand_tone, "Formal");
        assert_eq!(config.drafter_temperature, 0.7);
    }
}
