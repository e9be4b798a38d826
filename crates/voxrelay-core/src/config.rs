//! Configuration types for the relay service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::request::{DEFAULT_VIBE, DEFAULT_VOICE};

/// How the relay delivers audio back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Wait for the complete upstream body, then reply with it as an
    /// attachment download.
    #[default]
    Buffered,
    /// Forward upstream bytes to the caller as they arrive.
    Streamed,
}

/// Relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Upstream synthesis endpoint
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Outbound call budget in seconds, applied to both delivery modes
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Response delivery strategy
    #[serde(default)]
    pub delivery: DeliveryMode,

    /// Voice used when the caller does not pick one
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Vibe used when the caller does not pick one
    #[serde(default = "default_vibe")]
    pub default_vibe: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            timeout_secs: default_timeout_secs(),
            delivery: DeliveryMode::default(),
            default_voice: default_voice(),
            default_vibe: default_vibe(),
        }
    }
}

fn default_upstream_url() -> String {
    "https://www.openai.fm/api/generate".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_vibe() -> String {
    DEFAULT_VIBE.to_string()
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_cors_enabled(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_enabled() -> bool {
    true
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Parse the file when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
