use serde::{Deserialize, Serialize};

/// Feature flags controlling optional parts of the dashboard shell.
///
/// Loaded from `config.toml` at startup. Every field defaults to `true`
/// so that a missing or incomplete config file keeps the full shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the one-time service credentials prompt while demo values are in use.
    #[serde(default = "default_true")]
    pub credentials_prompt: bool,
    /// Render online/offline badges in the dashboard headers.
    #[serde(default = "default_true")]
    pub connectivity_badge: bool,
}

impl FeatureFlags {
    /// Every optional feature enabled.
    pub const ALL_ON: FeatureFlags = FeatureFlags {
        credentials_prompt: true,
        connectivity_badge: true,
    };
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::ALL_ON
    }
}

fn default_true() -> bool {
    true
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// The config used when `config.toml` is missing or unreadable.
    pub const DEFAULT: AppConfig = AppConfig {
        features: FeatureFlags::ALL_ON,
    };
}
