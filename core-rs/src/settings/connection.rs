//! Per-call connection settings and where they come from

use serde::{Deserialize, Serialize};

/// Where a VIVO server lives and how to authenticate against it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub base_url: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
}

impl ConnectionSettings {
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            email: email.into(),
            password: password.into(),
            graph: None,
        }
    }

    pub fn with_graph(mut self, graph: impl Into<String>) -> Self {
        self.graph = Some(graph.into());
        self
    }

    /// True when none of url, email or password carry a value
    pub fn is_empty(&self) -> bool {
        self.base_url.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}

/// Settings chosen by the caller, or a request to use the configured ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    CallerSupplied(ConnectionSettings),
    UseDefault,
}

impl SettingsSource {
    /// Treats `None` and empty settings alike, as "use the configuration".
    ///
    /// # Example
    ///
    /// ```
    /// use vivo_client::{ConnectionSettings, SettingsSource};
    ///
    /// assert_eq!(SettingsSource::from_optional(None), SettingsSource::UseDefault);
    /// assert_eq!(
    ///     SettingsSource::from_optional(Some(ConnectionSettings::default())),
    ///     SettingsSource::UseDefault
    /// );
    /// ```
    pub fn from_optional(settings: Option<ConnectionSettings>) -> Self {
        match settings {
            Some(settings) if !settings.is_empty() => SettingsSource::CallerSupplied(settings),
            _ => SettingsSource::UseDefault,
        }
    }

    /// Resolve against the configured defaults.
    ///
    /// Caller settings win as a whole; only a missing graph is inherited.
    pub fn resolve(&self, defaults: &ConnectionSettings) -> ConnectionSettings {
        match self {
            SettingsSource::CallerSupplied(settings) => {
                let mut resolved = settings.clone();
                if resolved.graph.is_none() {
                    resolved.graph = defaults.graph.clone();
                }
                resolved
            }
            SettingsSource::UseDefault => defaults.clone(),
        }
    }
}

impl From<ConnectionSettings> for SettingsSource {
    fn from(settings: ConnectionSettings) -> Self {
        SettingsSource::from_optional(Some(settings))
    }
}
