use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Parse `config.toml` contents. Malformed input logs a warning and
/// yields the all-enabled defaults.
pub fn parse_app_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse config.toml: {} (using defaults)", e);
        AppConfig::default()
    })
}

/// Parse and store the app config. Only the first call has effect.
pub fn load_app_config(contents: &str) -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_app_config(contents);
        tracing::info!("Feature flags: {:?}", config.features);
        config
    })
}

/// The loaded config, or defaults if `load_app_config` hasn't been called yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: AppConfig = AppConfig::DEFAULT;
    CONFIG.get().unwrap_or(&DEFAULT)
}
