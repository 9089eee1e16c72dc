//! Engine configuration. Nothing here changes how observations are scored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reference catalog source
    pub catalog: CatalogConfig,
    /// Operator credentials for the dashboard sign-in gate
    pub operator: OperatorConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in locations and history when set
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorConfig {
    pub username: String,
    pub passcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            username: "operator".to_string(),
            passcode: "sfas".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl EngineConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                match serde_json::from_str::<EngineConfig>(&data) {
                    Ok(c) => return c,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "invalid config; using defaults")
                    }
                }
            }
        }
        Self::default()
    }
}
