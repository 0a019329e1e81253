/**
 * config.rs
 * Loader for the vivo-client.yaml configuration file
 *
 * Format:
 * ```yaml
 * url_vivo: http://localhost:8080/vivo
 * email_user_vivo: vivo_root@example.org
 * password_user_vivo: secret
 * graph_vivo: http://vitro.mannlib.cornell.edu/default/vitro-kb-2
 * test_mode: false
 * debug: false
 * ```
 *
 * Every key is optional. Missing keys keep their defaults, and environment
 * variables override whatever the file says.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::VivoError;
use crate::settings::ConnectionSettings;

/// Default file name looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "vivo-client.yaml";

pub const ENV_URL: &str = "VIVO_URL";
pub const ENV_EMAIL: &str = "VIVO_EMAIL_USER";
pub const ENV_PASSWORD: &str = "VIVO_PASSWORD_USER";
pub const ENV_GRAPH: &str = "VIVO_GRAPH";
pub const ENV_TEST_MODE: &str = "VIVO_TEST_MODE";
pub const ENV_DEBUG: &str = "APP_DEBUG";

/// vivo-client.yaml file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VivoConfig {
    /// Base URL of the VIVO installation (no trailing `/api/...`)
    #[serde(rename = "url_vivo")]
    pub base_url: String,
    #[serde(rename = "email_user_vivo")]
    pub email: String,
    #[serde(rename = "password_user_vivo")]
    pub password: String,
    /// Named graph used by the demo operations
    #[serde(rename = "graph_vivo")]
    pub graph: String,
    /// Enables the test routes, together with `debug`
    pub test_mode: bool,
    pub debug: bool,
}

impl VivoConfig {
    /// Load vivo-client.yaml from specified path
    ///
    /// # Example
    /// ```no_run
    /// use vivo_client::VivoConfig;
    ///
    /// let config = VivoConfig::load("vivo-client.yaml").unwrap();
    /// println!("{}", config.base_url);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VivoError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(VivoError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(path).map_err(VivoError::Io)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, VivoError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(content)?)
    }

    /// Load the file when it exists, fall back to defaults otherwise,
    /// then apply environment overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, VivoError> {
        let path = path.as_ref();
        let config = if path.exists() {
            Self::load(path)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup (the process environment in practice)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.base_url = url;
        }
        if let Some(email) = lookup(ENV_EMAIL) {
            self.email = email;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = password;
        }
        if let Some(graph) = lookup(ENV_GRAPH) {
            self.graph = graph;
        }
        if let Some(flag) = lookup(ENV_TEST_MODE) {
            self.test_mode = parse_flag(&flag);
        }
        if let Some(flag) = lookup(ENV_DEBUG) {
            self.debug = parse_flag(&flag);
        }
        self
    }

    /// Validate that the configuration can reach a VIVO server
    ///
    /// Ensures:
    /// - url_vivo is present and is an absolute http(s) URL
    /// - email_user_vivo is present
    pub fn validate(&self) -> Result<(), VivoError> {
        if self.base_url.is_empty() {
            return Err(VivoError::ValidationError(
                "url_vivo cannot be empty".to_string(),
            ));
        }

        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            VivoError::ValidationError(format!("Invalid url_vivo '{}': {}", self.base_url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(VivoError::ValidationError(format!(
                "Invalid url_vivo scheme: expected 'http' or 'https', got '{}'",
                url.scheme()
            )));
        }

        if self.email.is_empty() {
            return Err(VivoError::ValidationError(
                "email_user_vivo cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save vivo-client.yaml to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), VivoError> {
        let yaml = serde_yaml::to_string(self)?;

        fs::write(path.as_ref(), yaml)?;

        Ok(())
    }

    /// Connection settings used when a caller does not supply its own
    pub fn connection(&self) -> ConnectionSettings {
        ConnectionSettings {
            base_url: self.base_url.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            graph: Some(self.graph.clone()),
        }
    }

    /// Whether the test-only routes and operations are reachable
    pub fn test_routes_enabled(&self) -> bool {
        self.debug && self.test_mode
    }
}

/// Env flag parsing: `true`, `1`, `on`, `yes` are true
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "on" | "yes"
    )
}
