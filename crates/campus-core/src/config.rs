use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub session: SessionConfig,
    pub log: LogConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    /// Below this many columns the sidebar collapses into the menu overlay.
    pub compact_width: u16,
    pub toast_ttl_ticks: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            compact_width: 100,
            toast_ttl_ticks: 12,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Reporter stamped on issues filed from the student dashboard.
    pub reporter_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reporter_name: "Alex Johnson".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
