pub mod handlers;
#[cfg(test)]
pub mod mocks;
pub mod provisioner;
pub mod requests;
pub mod responses;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-user/", post(handlers::create_user))
        .route("/create-user", post(handlers::create_user))
}
