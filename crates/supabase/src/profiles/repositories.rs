use async_trait::async_trait;

use crate::profiles::models::{NewProfile, ProfileRow};
use supausers_common::error::SupausersResult;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert one profile row and return it as stored.
    /// Fails with `ProfileNotCreated` when the store returns no rows.
    async fn insert(&self, profile: NewProfile) -> SupausersResult<ProfileRow>;
}
