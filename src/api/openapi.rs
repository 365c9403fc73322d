//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{ad_handler, seo_handler, settings_handler};
use crate::domain::{AdPlacement, LocationKind, SettingsUpdate, SiteSettings};
use crate::services::{CategoryPageMeta, LocationPageMeta, PageMeta, SaveResult};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Nexjob SEO & Settings Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nexjob SEO & Settings Service",
        version = "0.1.0",
        description = "SEO metadata resolution and site settings administration for the Nexjob job board",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // SEO metadata endpoints
        seo_handler::home_meta,
        seo_handler::jobs_meta,
        seo_handler::articles_meta,
        seo_handler::login_meta,
        seo_handler::signup_meta,
        seo_handler::profile_meta,
        seo_handler::category_meta,
        seo_handler::location_meta,
        // Advertisement endpoints
        ad_handler::get_ad_code,
        // Admin endpoints
        settings_handler::get_settings,
        settings_handler::update_settings,
        settings_handler::refresh_sitemap,
    ),
    components(
        schemas(
            PageMeta,
            CategoryPageMeta,
            LocationPageMeta,
            LocationKind,
            SiteSettings,
            SettingsUpdate,
            SaveResult,
            AdPlacement,
            ad_handler::AdCodeResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "SEO", description = "Resolved page metadata for the site renderer"),
        (name = "Advertisements", description = "Ad snippets by placement"),
        (name = "Admin", description = "Settings administration (super admin)")
    )
)]
pub struct ApiDoc;

/// Adds the bearer-token security scheme used by admin routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
