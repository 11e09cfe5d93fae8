use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::client::{SupabaseClient, SupabaseClientError};
use crate::identity::models::{CreatedIdentity, NewIdentity};
use crate::identity::repositories::IdentityRepository;
use supausers_common::error::{SupausersError, SupausersResult};

pub struct SupabaseIdentityRepository {
    client: SupabaseClient,
}

impl SupabaseIdentityRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// The admin API answers with the user object itself, though some
    /// deployments wrap it as `{"user": {...}}`. A null or missing user is
    /// `Ok(None)`.
    fn parse_created_user(body: Value) -> Result<Option<CreatedIdentity>, SupabaseClientError> {
        let user = match body {
            Value::Object(mut map) if map.contains_key("user") => {
                map.remove("user").unwrap_or(Value::Null)
            }
            other => other,
        };

        if user.is_null() {
            return Ok(None);
        }

        let created: CreatedIdentity =
            serde_json::from_value(user).map_err(|e| SupabaseClientError::Decode(e.to_string()))?;
        if created.id.is_empty() {
            return Ok(None);
        }
        Ok(Some(created))
    }
}

#[async_trait]
impl IdentityRepository for SupabaseIdentityRepository {
    async fn create_user(&self, identity: NewIdentity) -> SupausersResult<CreatedIdentity> {
        let url = self.client.auth_url("admin/users");
        let request = self.client.request(Method::POST, &url);
        let body = self.client.send_json(request, &identity).await?;

        match Self::parse_created_user(body)? {
            Some(created) => Ok(created),
            None => {
                tracing::warn!(email = %identity.email, "identity service returned no user");
                Err(SupausersError::IdentityNotCreated)
            }
        }
    }

    async fn delete_user(&self, user_id: &str) -> SupausersResult<()> {
        let url = self.client.auth_resource_url("admin/users", user_id)?;
        let request = self.client.request(Method::DELETE, &url);
        self.client.send(request).await?;
        Ok(())
    }
}
