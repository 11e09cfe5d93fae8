use serde::Serialize;

pub const USER_CREATED_MESSAGE: &str = "User and profile created successfully";

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub success: bool,
    pub user_id: String,
    pub message: String,
}

impl CreateUserResponse {
    pub fn created(user_id: String) -> Self {
        Self {
            success: true,
            user_id,
            message: USER_CREATED_MESSAGE.to_string(),
        }
    }
}
