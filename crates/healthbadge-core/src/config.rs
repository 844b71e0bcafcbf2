use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("HEALTHBADGE_LOG_LEVEL", "info");
    let soda_base_url = or_default("HEALTHBADGE_SODA_BASE_URL", "https://data.sfgov.org");
    if !(soda_base_url.starts_with("http://") || soda_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "HEALTHBADGE_SODA_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{soda_base_url}'"),
        });
    }
    let soda_dataset = or_default("HEALTHBADGE_SODA_DATASET", "sipz-fjte");
    let soda_app_token = lookup("HEALTHBADGE_SODA_APP_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());

    let request_timeout_secs = parse_u64("HEALTHBADGE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "HEALTHBADGE_USER_AGENT",
        "healthbadge/0.1 (inspection-overlay)",
    );
    let inject_interval_ms = parse_u64("HEALTHBADGE_INJECT_INTERVAL_MS", "100")?;
    let inject_max_attempts = parse_u32("HEALTHBADGE_INJECT_MAX_ATTEMPTS", "100")?;

    Ok(AppConfig {
        log_level,
        soda_base_url,
        soda_dataset,
        soda_app_token,
        request_timeout_secs,
        user_agent,
        inject_interval_ms,
        inject_max_attempts,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
