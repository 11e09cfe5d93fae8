use std::fmt;

use serde::Deserialize;
use supausers_supabase::identity::models::{NewIdentity, UserMetadata};
use supausers_supabase::profiles::models::NewProfile;

#[derive(Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub suscriptoruuid: Option<String>,
    #[serde(default)]
    pub puesto_uuid: Option<String>,
    #[serde(default)]
    pub rfc: Option<String>,
    #[serde(default)]
    pub status_code: Option<i64>,
}

impl CreateUserRequest {
    pub fn to_identity(&self) -> NewIdentity {
        NewIdentity {
            email: self.email.clone(),
            password: self.password.clone(),
            user_metadata: UserMetadata {
                full_name: self.full_name.clone(),
                phone_number: self.phone_number.clone(),
                suscriptoruuid: self.suscriptoruuid.clone(),
                puesto_uuid: self.puesto_uuid.clone(),
                rfc: self.rfc.clone(),
                status_code: self.status_code,
            },
        }
    }

    /// Profile row keyed by the identity id, with the email doubling as
    /// username.
    pub fn to_profile(&self, user_id: &str) -> NewProfile {
        NewProfile {
            id: user_id.to_string(),
            suscriptoruuid: self.suscriptoruuid.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone_number.clone(),
            puesto_uuid: self.puesto_uuid.clone(),
            rfc: self.rfc.clone(),
            status_code: self.status_code,
            username: self.email.clone(),
            email: self.email.clone(),
        }
    }
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("suscriptoruuid", &self.suscriptoruuid)
            .field("puesto_uuid", &self.puesto_uuid)
            .field("rfc", &self.rfc)
            .field("status_code", &self.status_code)
            .finish()
    }
}
