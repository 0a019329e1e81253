//! Settings module
//!
//! - `VivoConfig`: process configuration loaded once from vivo-client.yaml
//! - `ConnectionSettings` / `SettingsSource`: per-call credentials and the
//!   rule choosing between caller-supplied and configured values

mod config;
mod connection;

pub use config::{
    VivoConfig, DEFAULT_CONFIG_FILE, ENV_DEBUG, ENV_EMAIL, ENV_GRAPH, ENV_PASSWORD,
    ENV_TEST_MODE, ENV_URL,
};
pub use connection::{ConnectionSettings, SettingsSource};
