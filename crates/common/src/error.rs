use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupausersError {
    #[error("configuration error: {0}")]
    Config(String),

    /// The identity service answered but reported no created user.
    #[error("User creation failed")]
    IdentityNotCreated,

    /// The data store answered but returned no inserted rows.
    #[error("Profile creation failed")]
    ProfileNotCreated,

    /// A remote call failed outright: transport, non-2xx status, or an
    /// undecodable body.
    #[error("{0}")]
    Upstream(String),
}

impl SupausersError {
    /// Whether the failure is attributed to the caller's request rather than
    /// to this service or its collaborators.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::IdentityNotCreated | Self::ProfileNotCreated)
    }
}

pub type SupausersResult<T> = Result<T, SupausersError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_kinds_render_short_reasons() {
        assert_eq!(
            SupausersError::IdentityNotCreated.to_string(),
            "User creation failed"
        );
        assert_eq!(
            SupausersError::ProfileNotCreated.to_string(),
            "Profile creation failed"
        );
    }

    #[test]
    fn upstream_renders_message_verbatim() {
        let err = SupausersError::Upstream("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert!(!err.is_client_error());
    }

    #[test]
    fn client_error_classification() {
        assert!(SupausersError::IdentityNotCreated.is_client_error());
        assert!(SupausersError::ProfileNotCreated.is_client_error());
        assert!(!SupausersError::Config("x".into()).is_client_error());
    }
}
