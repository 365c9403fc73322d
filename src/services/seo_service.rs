//! SEO service - resolves page metadata for the site's page types.
//!
//! Combines the resolved site settings with the upstream filter-data
//! snapshot: slugs are matched back to canonical category/location names and
//! the admin-authored templates are rendered with the entity name and site
//! identity.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{match_category, match_location, LocationKind, SiteSettings};
use crate::errors::{AppResult, OptionExt};
use crate::infra::FilterDataProvider;
use crate::services::{FetchOptions, SettingsService};
use crate::utils::render;

/// Rendered metadata for a page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageMeta {
    /// Rendered page title
    pub title: String,
    /// Rendered meta description
    pub description: String,
    /// Open Graph image URL, when the page type has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// Metadata for a category landing page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryPageMeta {
    /// Canonical category display name
    pub category: String,
    /// The slug that resolved to it
    pub slug: String,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Metadata for a location landing page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationPageMeta {
    /// Canonical location display name
    pub location: String,
    /// The slug that resolved to it
    pub slug: String,
    /// Whether the slug named a province or a city
    pub location_type: LocationKind,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// SEO service trait for dependency injection.
#[async_trait]
pub trait SeoService: Send + Sync {
    /// Home page metadata
    async fn home(&self) -> PageMeta;

    /// Job listing page metadata
    async fn jobs_index(&self) -> PageMeta;

    /// Article listing page metadata
    async fn articles_index(&self) -> PageMeta;

    /// Login page metadata
    async fn login_page(&self) -> PageMeta;

    /// Signup page metadata
    async fn signup_page(&self) -> PageMeta;

    /// Profile page metadata
    async fn profile_page(&self) -> PageMeta;

    /// Category landing page metadata; NotFound when the slug matches no
    /// known category
    async fn category_page(&self, slug: &str) -> AppResult<CategoryPageMeta>;

    /// Location landing page metadata; NotFound when the slug matches no
    /// known province or city
    async fn location_page(&self, slug: &str) -> AppResult<LocationPageMeta>;

    /// The robots.txt body
    async fn robots_txt(&self) -> String;
}

/// Concrete implementation over the settings service and filter API.
pub struct SeoBuilder {
    settings: Arc<dyn SettingsService>,
    filters: Arc<dyn FilterDataProvider>,
}

impl SeoBuilder {
    /// Create new SEO service instance
    pub fn new(settings: Arc<dyn SettingsService>, filters: Arc<dyn FilterDataProvider>) -> Self {
        Self { settings, filters }
    }

    async fn settings(&self) -> SiteSettings {
        self.settings.get_settings(FetchOptions::cached()).await
    }
}

fn site_vars(settings: &SiteSettings) -> [(&'static str, &str); 1] {
    [("site_title", settings.site_title.as_str())]
}

#[async_trait]
impl SeoService for SeoBuilder {
    async fn home(&self) -> PageMeta {
        let settings = self.settings().await;
        PageMeta {
            title: format!("{} - {}", settings.site_title, settings.site_tagline),
            description: settings.site_description.clone(),
            og_image: Some(settings.home_og_image),
        }
    }

    async fn jobs_index(&self) -> PageMeta {
        let settings = self.settings().await;
        PageMeta {
            title: render(&settings.jobs_title, &site_vars(&settings)),
            description: render(&settings.jobs_description, &site_vars(&settings)),
            og_image: Some(settings.jobs_og_image.clone()),
        }
    }

    async fn articles_index(&self) -> PageMeta {
        let settings = self.settings().await;
        PageMeta {
            title: render(&settings.articles_title, &site_vars(&settings)),
            description: render(&settings.articles_description, &site_vars(&settings)),
            og_image: Some(settings.articles_og_image.clone()),
        }
    }

    async fn login_page(&self) -> PageMeta {
        let settings = self.settings().await;
        PageMeta {
            title: render(&settings.login_page_title, &site_vars(&settings)),
            description: render(&settings.login_page_description, &site_vars(&settings)),
            og_image: None,
        }
    }

    async fn signup_page(&self) -> PageMeta {
        let settings = self.settings().await;
        PageMeta {
            title: render(&settings.signup_page_title, &site_vars(&settings)),
            description: render(&settings.signup_page_description, &site_vars(&settings)),
            og_image: None,
        }
    }

    async fn profile_page(&self) -> PageMeta {
        let settings = self.settings().await;
        PageMeta {
            title: render(&settings.profile_page_title, &site_vars(&settings)),
            description: render(&settings.profile_page_description, &site_vars(&settings)),
            og_image: None,
        }
    }

    async fn category_page(&self, slug: &str) -> AppResult<CategoryPageMeta> {
        let settings = self.settings().await;
        let filter_data = self
            .filters
            .fetch(&settings.filters_api_url, &settings.auth_token)
            .await?;

        let category = match_category(slug, &filter_data.categories)
            .map(str::to_string)
            .ok_or_not_found()?;

        let vars = [
            ("kategori", category.as_str()),
            ("site_title", settings.site_title.as_str()),
            ("lokasi", ""),
        ];

        Ok(CategoryPageMeta {
            meta: PageMeta {
                title: render(&settings.category_page_title_template, &vars),
                description: render(&settings.category_page_description_template, &vars),
                og_image: Some(settings.jobs_og_image.clone()),
            },
            category,
            slug: slug.to_string(),
        })
    }

    async fn location_page(&self, slug: &str) -> AppResult<LocationPageMeta> {
        let settings = self.settings().await;
        let filter_data = self
            .filters
            .fetch(&settings.filters_api_url, &settings.auth_token)
            .await?;

        let matched = match_location(slug, &filter_data.provinces).ok_or_not_found()?;

        let vars = [
            ("lokasi", matched.name.as_str()),
            ("site_title", settings.site_title.as_str()),
            ("kategori", ""),
        ];

        Ok(LocationPageMeta {
            meta: PageMeta {
                title: render(&settings.location_page_title_template, &vars),
                description: render(&settings.location_page_description_template, &vars),
                og_image: Some(settings.jobs_og_image.clone()),
            },
            location: matched.name,
            location_type: matched.kind,
            slug: slug.to_string(),
        })
    }

    async fn robots_txt(&self) -> String {
        self.settings().await.robots_txt
    }
}
