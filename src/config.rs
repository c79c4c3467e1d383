//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::mailer::DEFAULT_DELAY;
use crate::state::DEFAULT_AUTO_HIDE;

/// Company phone shown in the footer and used by the copy shortcut
const DEFAULT_COMPANY_PHONE: &str = "912 34 567";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KontaktConfig {
    /// Simulated transport delay in milliseconds
    pub mailer_delay_ms: Option<u64>,
    /// Force the transport to reject, to exercise the error path
    pub simulate_failure: Option<bool>,
    /// Seconds before the success banner hides
    pub message_hide_secs: Option<u64>,
    /// Company phone number override
    pub company_phone: Option<String>,
}

impl KontaktConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("no", "sorhusbygg", "kontakt-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: KontaktConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn mailer_delay(&self) -> Duration {
        self.mailer_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    pub fn auto_hide(&self) -> Duration {
        self.message_hide_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_AUTO_HIDE)
    }

    pub fn company_phone(&self) -> &str {
        self.company_phone.as_deref().unwrap_or(DEFAULT_COMPANY_PHONE)
    }
}
