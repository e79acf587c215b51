/*
[INPUT]:  Optional YAML configuration file and VK_* environment variables
[OUTPUT]: Validated linker configuration
[POS]:    Configuration layer - access token and API settings
[UPDATE]: When adding new configuration options
*/

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;
use vk_linker_adapter::{API_BASE_URL, ClientConfig, DEFAULT_API_VERSION};

/// Prefix shared by every environment variable, e.g. `VK_API_TOKEN`
pub const ENV_PREFIX: &str = "VK";

/// Errors raised while assembling the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("access token is missing; set VK_API_TOKEN in the environment or .env file")]
    MissingToken,

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
}

/// Top-level configuration for the linker
#[derive(Clone, Deserialize, Serialize)]
pub struct LinkerConfig {
    /// VK API access token
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Host serving shortened links
    #[serde(default = "default_short_domain")]
    pub short_domain: String,
    #[serde(default = "default_validation_timeout_secs")]
    pub validation_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_short_domain() -> String {
    "vk.cc".to_string()
}

fn default_validation_timeout_secs() -> u64 {
    3
}

fn default_request_timeout_secs() -> u64 {
    5
}

impl fmt::Debug for LinkerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkerConfig")
            .field("api_token", &"***")
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("short_domain", &self.short_domain)
            .field("validation_timeout_secs", &self.validation_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl LinkerConfig {
    /// Load configuration from the optional file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from explicit sources; later sources win
    pub fn from_sources(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml));
        }
        let settings = builder.add_source(env).build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if self.validation_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        if self.short_domain.trim().is_empty() {
            return Err(ConfigError::Invalid("short_domain is empty".to_string()));
        }
        Url::parse(&self.api_base_url).map_err(|err| {
            ConfigError::Invalid(format!("api_base_url {:?}: {}", self.api_base_url, err))
        })?;
        Ok(())
    }

    /// HTTP client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.request_timeout_secs),
            validation_timeout: Duration::from_secs(self.validation_timeout_secs),
            api_version: self.api_version.clone(),
            ..ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let mut vars = config::Map::new();
        for (key, value) in pairs {
            vars.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn test_defaults_with_token_only() {
        let config = LinkerConfig::from_sources(None, env_from(&[("VK_API_TOKEN", "abc")]))
            .expect("config");

        assert_eq!(config.api_token, "abc");
        assert_eq!(config.api_base_url, "https://api.vk.com");
        assert_eq!(config.api_version, "5.131");
        assert_eq!(config.short_domain, "vk.cc");

        let client_config = config.client_config();
        assert_eq!(client_config.validation_timeout, Duration::from_secs(3));
        assert_eq!(client_config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_token() {
        let err = LinkerConfig::from_sources(None, env_from(&[])).expect_err("token required");
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_blank_token() {
        let err = LinkerConfig::from_sources(None, env_from(&[("VK_API_TOKEN", "   ")]))
            .expect_err("blank token rejected");
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_env_overrides() {
        let config = LinkerConfig::from_sources(
            None,
            env_from(&[
                ("VK_API_TOKEN", "abc"),
                ("VK_API_BASE_URL", "http://127.0.0.1:9000"),
                ("VK_REQUEST_TIMEOUT_SECS", "10"),
            ]),
        )
        .expect("config");

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.validation_timeout_secs, 3);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = LinkerConfig::from_sources(
            None,
            env_from(&[("VK_API_TOKEN", "abc"), ("VK_VALIDATION_TIMEOUT_SECS", "0")]),
        )
        .expect_err("zero timeout");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = LinkerConfig::from_sources(
            None,
            env_from(&[("VK_API_TOKEN", "abc"), ("VK_API_BASE_URL", "nowhere")]),
        )
        .expect_err("bad base url");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_yaml_file_then_env() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "api_token: from-file").expect("write");
        writeln!(file, "short_domain: vk.com").expect("write");
        writeln!(file, "api_version: \"5.199\"").expect("write");

        let from_file = LinkerConfig::from_sources(Some(file.path()), env_from(&[]))
            .expect("config");
        assert_eq!(from_file.api_token, "from-file");
        assert_eq!(from_file.short_domain, "vk.com");
        assert_eq!(from_file.api_version, "5.199");

        let overridden = LinkerConfig::from_sources(
            Some(file.path()),
            env_from(&[("VK_API_TOKEN", "from-env")]),
        )
        .expect("config");
        assert_eq!(overridden.api_token, "from-env");
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let err = LinkerConfig::from_sources(
            Some(Path::new("/nonexistent/vk-linker.yaml")),
            env_from(&[("VK_API_TOKEN", "abc")]),
        )
        .expect_err("file must exist");
        assert!(matches!(err, ConfigError::Source(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = LinkerConfig::from_sources(None, env_from(&[("VK_API_TOKEN", "secret")]))
            .expect("config");
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
