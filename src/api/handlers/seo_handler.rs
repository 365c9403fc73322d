//! SEO metadata handlers.
//!
//! The page-rendering front end calls these endpoints to get the resolved
//! title/description/OG-image tuple for each page type. Unresolvable
//! category/location slugs come back as 404.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::{CategoryPageMeta, LocationPageMeta, PageMeta};

/// Create SEO metadata routes
pub fn seo_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(home_meta))
        .route("/jobs", get(jobs_meta))
        .route("/articles", get(articles_meta))
        .route("/login", get(login_meta))
        .route("/signup", get(signup_meta))
        .route("/profile", get(profile_meta))
        .route("/jobs/category/:slug", get(category_meta))
        .route("/jobs/location/:slug", get(location_meta))
}

/// Home page metadata
#[utoipa::path(
    get,
    path = "/seo/home",
    tag = "SEO",
    responses((status = 200, description = "Home page metadata", body = PageMeta))
)]
pub async fn home_meta(State(state): State<AppState>) -> Json<PageMeta> {
    Json(state.seo_service.home().await)
}

/// Job listing page metadata
#[utoipa::path(
    get,
    path = "/seo/jobs",
    tag = "SEO",
    responses((status = 200, description = "Job listing metadata", body = PageMeta))
)]
pub async fn jobs_meta(State(state): State<AppState>) -> Json<PageMeta> {
    Json(state.seo_service.jobs_index().await)
}

/// Article listing page metadata
#[utoipa::path(
    get,
    path = "/seo/articles",
    tag = "SEO",
    responses((status = 200, description = "Article listing metadata", body = PageMeta))
)]
pub async fn articles_meta(State(state): State<AppState>) -> Json<PageMeta> {
    Json(state.seo_service.articles_index().await)
}

/// Login page metadata
#[utoipa::path(
    get,
    path = "/seo/login",
    tag = "SEO",
    responses((status = 200, description = "Login page metadata", body = PageMeta))
)]
pub async fn login_meta(State(state): State<AppState>) -> Json<PageMeta> {
    Json(state.seo_service.login_page().await)
}

/// Signup page metadata
#[utoipa::path(
    get,
    path = "/seo/signup",
    tag = "SEO",
    responses((status = 200, description = "Signup page metadata", body = PageMeta))
)]
pub async fn signup_meta(State(state): State<AppState>) -> Json<PageMeta> {
    Json(state.seo_service.signup_page().await)
}

/// Profile page metadata
#[utoipa::path(
    get,
    path = "/seo/profile",
    tag = "SEO",
    responses((status = 200, description = "Profile page metadata", body = PageMeta))
)]
pub async fn profile_meta(State(state): State<AppState>) -> Json<PageMeta> {
    Json(state.seo_service.profile_page().await)
}

/// Category landing page metadata
#[utoipa::path(
    get,
    path = "/seo/jobs/category/{slug}",
    tag = "SEO",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category page metadata", body = CategoryPageMeta),
        (status = 404, description = "Unknown category slug")
    )
)]
pub async fn category_meta(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CategoryPageMeta>> {
    let meta = state.seo_service.category_page(&slug).await?;
    Ok(Json(meta))
}

/// Location landing page metadata
#[utoipa::path(
    get,
    path = "/seo/jobs/location/{slug}",
    tag = "SEO",
    params(("slug" = String, Path, description = "Province or city slug")),
    responses(
        (status = 200, description = "Location page metadata", body = LocationPageMeta),
        (status = 404, description = "Unknown location slug")
    )
)]
pub async fn location_meta(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<LocationPageMeta>> {
    let meta = state.seo_service.location_page(&slug).await?;
    Ok(Json(meta))
}

/// Serve robots.txt from the active settings
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.seo_service.robots_txt().await;
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
