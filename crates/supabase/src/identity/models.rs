use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque metadata stored alongside the identity record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMetadata {
    pub full_name: String,
    pub phone_number: Option<String>,
    pub suscriptoruuid: Option<String>,
    pub puesto_uuid: Option<String>,
    pub rfc: Option<String>,
    pub status_code: Option<i64>,
}

/// Payload for the auth admin "create user" call.
#[derive(Clone, Serialize)]
pub struct NewIdentity {
    pub email: String,
    pub password: String,
    pub user_metadata: UserMetadata,
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("user_metadata", &self.user_metadata)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedIdentity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}
