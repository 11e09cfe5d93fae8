use std::sync::Arc;

use supausers_common::error::SupausersResult;
use supausers_supabase::identity::repositories::IdentityRepository;
use supausers_supabase::profiles::repositories::ProfileRepository;

use crate::users::requests::CreateUserRequest;

/// Creates the identity record, then the profile row keyed by its id.
///
/// The two calls are not atomic. When the profile step fails the identity is
/// left in place unless `compensate_orphans` is set, in which case a
/// best-effort delete is issued before the profile error is returned.
#[derive(Clone)]
pub struct UserProvisioner {
    identity_repo: Arc<dyn IdentityRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    compensate_orphans: bool,
}

impl UserProvisioner {
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        compensate_orphans: bool,
    ) -> Self {
        Self {
            identity_repo,
            profile_repo,
            compensate_orphans,
        }
    }

    /// Returns the new identity id.
    pub async fn provision(&self, request: CreateUserRequest) -> SupausersResult<String> {
        let identity = self.identity_repo.create_user(request.to_identity()).await?;
        let user_id = identity.id;
        tracing::info!(%user_id, "identity created");

        if let Err(err) = self.profile_repo.insert(request.to_profile(&user_id)).await {
            self.handle_orphan(&user_id).await;
            return Err(err);
        }

        Ok(user_id)
    }

    async fn handle_orphan(&self, user_id: &str) {
        if !self.compensate_orphans {
            tracing::warn!(%user_id, "profile insert failed, identity left without profile");
            return;
        }

        match self.identity_repo.delete_user(user_id).await {
            Ok(()) => tracing::warn!(%user_id, "profile insert failed, identity deleted"),
            Err(e) => tracing::error!(
                %user_id,
                error = %e,
                "profile insert failed and identity cleanup failed"
            ),
        }
    }
}
