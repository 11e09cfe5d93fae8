use serde::Deserialize;
use std::env;
use supausers_common::error::{SupausersError, SupausersResult};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub profiles_table: String,
    pub request_timeout_secs: u64,
    /// Delete the freshly created identity when its profile insert fails.
    pub compensate_orphaned_identities: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> SupausersResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let supabase_url = get_var("SUPABASE_URL")?.trim_end_matches('/').to_owned();
        if supabase_url.is_empty() {
            return Err(SupausersError::Config(
                "SUPABASE_URL must not be empty".to_string(),
            ));
        }

        Ok(Self {
            supabase_url,
            supabase_key: get_var("SUPABASE_KEY")?,
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "8080")
                .parse()
                .map_err(|e| SupausersError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            profiles_table: get_var_or("PROFILES_TABLE", "profiles"),
            request_timeout_secs: parse_timeout(&get_var_or("REQUEST_TIMEOUT_SECS", "30"))?,
            compensate_orphaned_identities: parse_flag(
                "COMPENSATE_ORPHANED_IDENTITIES",
                &get_var_or("COMPENSATE_ORPHANED_IDENTITIES", "false"),
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var(key: &str) -> SupausersResult<String> {
    env::var(key).map_err(|_| SupausersError::Config(format!("{key} is required but not set")))
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_timeout(raw: &str) -> SupausersResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(SupausersError::Config(
            "invalid REQUEST_TIMEOUT_SECS: must be at least 1".to_string(),
        )),
        Ok(secs) => Ok(secs),
        Err(e) => Err(SupausersError::Config(format!(
            "invalid REQUEST_TIMEOUT_SECS: {e}"
        ))),
    }
}

fn parse_flag(key: &str, raw: &str) -> SupausersResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SupausersError::Config(format!(
            "invalid {key}: expected a boolean, got {other:?}"
        ))),
    }
}
