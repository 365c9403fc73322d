//! SEO pipeline tests: slug resolution through template rendering.
//!
//! The settings service and filter API are replaced with fixed stubs so the
//! full resolve-then-render path can be asserted end to end.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use nexjob::config::Config;
use nexjob::domain::{
    FilterData, LocationKind, Province, SettingsUpdate, SiteSettings,
};
use nexjob::errors::{AppError, AppResult};
use nexjob::infra::FilterDataProvider;
use nexjob::services::{
    FetchOptions, SaveResult, SeoBuilder, SeoService, SettingsService,
};

/// Settings service stub handing out a fixed record.
struct StubSettings {
    settings: SiteSettings,
}

#[async_trait]
impl SettingsService for StubSettings {
    async fn get_settings(&self, _opts: FetchOptions) -> SiteSettings {
        self.settings.clone()
    }

    async fn save_settings(&self, _caller: Uuid, _update: SettingsUpdate) -> SaveResult {
        SaveResult::ok()
    }

    async fn touch_sitemap_timestamp(&self, _caller: Uuid) {}

    fn clear_cache(&self) {}
}

/// Filter API stub handing out a fixed snapshot.
struct StubFilters {
    data: FilterData,
}

#[async_trait]
impl FilterDataProvider for StubFilters {
    async fn fetch(&self, _filters_url: &str, _auth_token: &str) -> AppResult<FilterData> {
        Ok(self.data.clone())
    }
}

fn test_settings() -> SiteSettings {
    let mut settings = SiteSettings::defaults(&Config::from_env());
    settings.site_title = "Nexjob".to_string();
    settings
}

fn test_filters() -> FilterData {
    FilterData {
        categories: vec!["Teknologi Informasi".to_string(), "Pemasaran".to_string()],
        provinces: vec![
            Province {
                name: "Jawa Barat".to_string(),
                cities: vec!["Bandung".to_string(), "Bekasi".to_string()],
            },
            Province {
                name: "DKI Jakarta".to_string(),
                cities: vec!["Jakarta Selatan".to_string()],
            },
        ],
    }
}

fn seo_service() -> SeoBuilder {
    SeoBuilder::new(
        Arc::new(StubSettings {
            settings: test_settings(),
        }),
        Arc::new(StubFilters {
            data: test_filters(),
        }),
    )
}

#[tokio::test]
async fn category_page_resolves_and_renders() {
    let service = seo_service();
    let meta = service.category_page("teknologi-informasi").await.unwrap();

    assert_eq!(meta.category, "Teknologi Informasi");
    assert_eq!(meta.slug, "teknologi-informasi");
    assert_eq!(
        meta.meta.title,
        "Lowongan Kerja Teknologi Informasi - Nexjob"
    );
    assert!(meta.meta.description.contains("Teknologi Informasi"));
    assert!(meta.meta.description.contains("Nexjob"));
}

#[tokio::test]
async fn unknown_category_slug_is_not_found() {
    let service = seo_service();
    let result = service.category_page("unknown-slug").await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn location_page_resolves_a_province() {
    let service = seo_service();
    let meta = service.location_page("jawa-barat").await.unwrap();

    assert_eq!(meta.location, "Jawa Barat");
    assert_eq!(meta.location_type, LocationKind::Province);
    assert_eq!(meta.meta.title, "Lowongan Kerja di Jawa Barat - Nexjob");
}

#[tokio::test]
async fn location_page_resolves_a_city() {
    let service = seo_service();
    let meta = service.location_page("jakarta-selatan").await.unwrap();

    assert_eq!(meta.location, "Jakarta Selatan");
    assert_eq!(meta.location_type, LocationKind::City);
    assert_eq!(
        meta.meta.title,
        "Lowongan Kerja di Jakarta Selatan - Nexjob"
    );
}

#[tokio::test]
async fn unknown_location_slug_is_not_found() {
    let service = seo_service();
    let result = service.location_page("sumatera-utara").await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn listing_pages_render_site_title() {
    let service = seo_service();

    let jobs = service.jobs_index().await;
    assert_eq!(jobs.title, "Lowongan Kerja Terbaru - Nexjob");
    assert!(jobs.og_image.is_some());

    let articles = service.articles_index().await;
    assert_eq!(articles.title, "Tips Karir & Panduan Kerja - Nexjob");
}

#[tokio::test]
async fn auth_pages_render_from_settings() {
    let service = seo_service();

    let login = service.login_page().await;
    assert_eq!(login.title, "Login - Nexjob");
    assert!(login.og_image.is_none());

    let signup = service.signup_page().await;
    assert_eq!(signup.title, "Daftar Akun - Nexjob");
}

#[tokio::test]
async fn robots_txt_comes_from_settings() {
    let service = seo_service();
    let body = service.robots_txt().await;

    assert!(body.starts_with("User-agent: *"));
    assert!(body.contains("Disallow: /admin"));
}

#[tokio::test]
async fn upstream_failure_is_not_mapped_to_not_found() {
    struct FailingFilters;

    #[async_trait]
    impl FilterDataProvider for FailingFilters {
        async fn fetch(&self, _filters_url: &str, _auth_token: &str) -> AppResult<FilterData> {
            Err(AppError::upstream("connection refused"))
        }
    }

    let service = SeoBuilder::new(
        Arc::new(StubSettings {
            settings: test_settings(),
        }),
        Arc::new(FailingFilters),
    );

    let result = service.category_page("teknologi-informasi").await;
    assert!(matches!(result, Err(AppError::Upstream(_))));
}
