pub mod client;
pub mod identity;
pub mod profiles;

use std::time::Duration;

use reqwest::Url;
use supausers_common::error::{SupausersError, SupausersResult};

pub use client::SupabaseClient;

/// Build the shared backend client used by every repository.
pub fn create_client(
    base_url: &str,
    api_key: &str,
    timeout: Duration,
) -> SupausersResult<SupabaseClient> {
    let parsed = Url::parse(base_url)
        .map_err(|e| SupausersError::Config(format!("invalid SUPABASE_URL {base_url:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SupausersError::Config(format!(
            "SUPABASE_URL must be http(s), got {}",
            parsed.scheme()
        )));
    }

    tracing::info!(host = parsed.host_str().unwrap_or_default(), "configuring backend client");
    SupabaseClient::new(base_url, api_key, timeout)
        .map_err(|e| SupausersError::Config(format!("failed to build http client: {e}")))
}
