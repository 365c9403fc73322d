//! Admin settings handlers.
//!
//! The admin back office always reads fresh settings (never the cache) and
//! writes through the super-admin-gated save path. Save outcomes come back
//! as an explicit success/error body rather than a thrown error.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Extension, Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{SettingsUpdate, SiteSettings};
use crate::services::{FetchOptions, SaveResult};
use crate::types::{ApiResponse, MessageResponse};

/// Create admin routes (wrapped in the JWT middleware by the router)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/sitemap/refresh", post(refresh_sitemap))
}

/// Read the active settings record, bypassing the cache
#[utoipa::path(
    get,
    path = "/admin/settings",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active settings record", body = SiteSettings),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> Json<ApiResponse<SiteSettings>> {
    let settings = state
        .settings_service
        .get_settings(FetchOptions::admin())
        .await;

    Json(ApiResponse::success(settings))
}

/// Save a partial settings update (super admin only)
#[utoipa::path(
    put,
    path = "/admin/settings",
    tag = "Admin",
    security(("bearer_auth" = [])),
    request_body = SettingsUpdate,
    responses(
        (status = 200, description = "Settings saved", body = SaveResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a super admin", body = SaveResult),
        (status = 500, description = "Storage failure", body = SaveResult)
    )
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(update): ValidatedJson<SettingsUpdate>,
) -> (StatusCode, Json<SaveResult>) {
    let result = state.settings_service.save_settings(user.id, update).await;

    let status = if result.success {
        StatusCode::OK
    } else if result.is_unauthorized() {
        StatusCode::FORBIDDEN
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(result))
}

/// Stamp the last sitemap generation time (super admin only; no-op otherwise)
#[utoipa::path(
    post,
    path = "/admin/sitemap/refresh",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Timestamp updated when authorized", body = MessageResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn refresh_sitemap(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Json<MessageResponse> {
    state.settings_service.touch_sitemap_timestamp(user.id).await;
    Json(MessageResponse::new("Sitemap timestamp refreshed"))
}
