mod error;
mod extractors;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use supausers_common::types::ServiceInfo;
use supausers_config::{init_tracing, AppConfig};
use supausers_supabase::identity::supabase_repository::SupabaseIdentityRepository;
use supausers_supabase::profiles::supabase_repository::SupabaseProfileRepository;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use users::provisioner::UserProvisioner;

#[derive(Clone)]
pub struct AppState {
    pub provisioner: UserProvisioner,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("supausers-api", env!("CARGO_PKG_VERSION")))
}

fn build_router(state: AppState) -> Router {
    // Any origin, method, and header with credentials. A literal `*` is not
    // allowed alongside credentials, so the request's values are echoed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(users::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = "supausers-api", "starting");

    let client = supausers_supabase::create_client(
        &config.supabase_url,
        &config.supabase_key,
        Duration::from_secs(config.request_timeout_secs),
    )
    .expect("failed to create backend client");

    let state = AppState {
        provisioner: UserProvisioner::new(
            Arc::new(SupabaseIdentityRepository::new(client.clone())),
            Arc::new(SupabaseProfileRepository::new(
                client,
                config.profiles_table.clone(),
            )),
            config.compensate_orphaned_identities,
        ),
    };

    if config.compensate_orphaned_identities {
        tracing::info!("orphaned identities will be deleted when profile creation fails");
    }

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
