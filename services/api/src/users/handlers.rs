use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::users::requests::CreateUserRequest;
use crate::users::responses::CreateUserResponse;
use crate::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let email = body.email.clone();
    match state.provisioner.provision(body).await {
        Ok(user_id) => {
            tracing::info!(%user_id, "user provisioned");
            Ok(Json(CreateUserResponse::created(user_id)))
        }
        Err(err) => {
            if err.is_client_error() {
                tracing::warn!(%email, error = %err, "user provisioning rejected");
            } else {
                tracing::error!(%email, error = %err, "user provisioning failed");
            }
            Err(err.into())
        }
    }
}
