use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::client::{SupabaseClient, SupabaseClientError};
use crate::profiles::models::{NewProfile, ProfileRow};
use crate::profiles::repositories::ProfileRepository;
use supausers_common::error::{SupausersError, SupausersResult};

pub struct SupabaseProfileRepository {
    client: SupabaseClient,
    table: String,
}

impl SupabaseProfileRepository {
    pub fn new(client: SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    async fn insert(&self, profile: NewProfile) -> SupausersResult<ProfileRow> {
        let url = self.client.rest_url(&self.table);
        let request = self
            .client
            .request(Method::POST, &url)
            .header("Prefer", "return=representation");
        let body = self.client.send_json(request, &profile).await?;

        let rows = match body {
            Value::Null => Vec::new(),
            Value::Array(rows) => rows,
            // Single-object responses (`Accept: application/vnd.pgrst.object`).
            Value::Object(row) => vec![Value::Object(row)],
            other => {
                return Err(SupabaseClientError::Decode(format!(
                    "expected inserted rows, got {other}"
                ))
                .into())
            }
        };

        // Column shape belongs to the table; any echoed row counts as inserted.
        match rows.into_iter().next() {
            Some(row) => Ok(serde_json::from_value(row).unwrap_or_default()),
            None => {
                tracing::warn!(table = %self.table, id = %profile.id, "profile insert returned no rows");
                Err(SupausersError::ProfileNotCreated)
            }
        }
    }
}
