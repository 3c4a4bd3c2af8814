//! Run configuration loaded from a JSON file.
//!
//! Carries the credentials, the target list, and the pacing knobs.
//! Credentials are config-only; they never appear in source.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::credential::SessionCredentials;

fn default_delay_seconds() -> u64 {
    1
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// `sessionid` cookie / anti-forgery token of the authenticated session.
    pub session_id: String,
    /// `steamLoginSecure` cookie of the authenticated session.
    pub steam_login_secure: String,
    /// SteamID64 values to block, processed in this order.
    pub steam_ids_to_block: Vec<String>,
    /// Seconds to wait between consecutive requests.
    #[serde(default = "default_delay_seconds")]
    pub delay_seconds: u64,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Where to save the result list. Defaults to a timestamped filename.
    #[serde(default)]
    pub output_file: Option<String>,
}

impl AppConfig {
    /// Load and validate a config file. Any problem here is fatal to the
    /// run; no requests are sent on a bad config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("config file {} is not valid JSON", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.session_id.is_empty() {
            bail!("session_id is not set");
        }
        if self.steam_login_secure.is_empty() {
            bail!("steam_login_secure is not set");
        }
        if self.steam_ids_to_block.is_empty() {
            bail!("steam_ids_to_block is empty, nothing to do");
        }
        Ok(())
    }

    pub fn credentials(&self) -> SessionCredentials {
        SessionCredentials {
            session_id: self.session_id.clone(),
            steam_login_secure: self.steam_login_secure.clone(),
        }
    }
}
