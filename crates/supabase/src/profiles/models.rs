use serde::{Deserialize, Serialize};

/// Row written to the profiles table. `id` is the identity id; absent
/// optional fields are written as null.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewProfile {
    pub id: String,
    pub suscriptoruuid: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    pub puesto_uuid: Option<String>,
    pub rfc: Option<String>,
    pub status_code: Option<i64>,
    pub username: String,
    pub email: String,
}

/// Inserted row as echoed back by the table API. Every column is optional
/// since the table may hide or rename any of them; others are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ProfileRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
