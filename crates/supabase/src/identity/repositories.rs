use async_trait::async_trait;

use crate::identity::models::{CreatedIdentity, NewIdentity};
use supausers_common::error::SupausersResult;

#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Create an authentication record.
    /// Fails with `IdentityNotCreated` when the service answers without a user.
    async fn create_user(&self, identity: NewIdentity) -> SupausersResult<CreatedIdentity>;

    /// Remove an authentication record by id.
    async fn delete_user(&self, user_id: &str) -> SupausersResult<()>;
}
