use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use supausers_common::error::SupausersError;

pub struct ApiError(pub SupausersError);

impl From<SupausersError> for ApiError {
    fn from(err: SupausersError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}
