//! Advertisement placement handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::domain::AdPlacement;
use crate::errors::{AppError, AppResult};
use crate::types::ApiResponse;

/// Create advertisement routes
pub fn ads_routes() -> Router<AppState> {
    Router::new().route("/:placement", get(get_ad_code))
}

/// Ad snippet for a placement
#[derive(Debug, Serialize, ToSchema)]
pub struct AdCodeResponse {
    /// Placement the snippet belongs to
    pub placement: AdPlacement,
    /// Raw ad HTML snippet; empty when the placement is unset
    pub code: String,
}

/// Get the ad snippet for a placement
#[utoipa::path(
    get,
    path = "/ads/{placement}",
    tag = "Advertisements",
    params(("placement" = String, Path, description = "Placement key, e.g. popup or single_middle")),
    responses(
        (status = 200, description = "Ad snippet for the placement", body = AdCodeResponse),
        (status = 400, description = "Unknown placement")
    )
)]
pub async fn get_ad_code(
    State(state): State<AppState>,
    Path(placement): Path<String>,
) -> AppResult<Json<ApiResponse<AdCodeResponse>>> {
    let placement: AdPlacement = placement
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Unknown ad placement: {placement}")))?;

    let code = state.ad_service.ad_code(placement).await;

    Ok(Json(ApiResponse::success(AdCodeResponse {
        placement,
        code,
    })))
}
