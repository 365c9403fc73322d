//! Site-wide settings record.
//!
//! Exactly one logical settings record is active at a time. It is created
//! lazily from [`SiteSettings::defaults`] when storage has no row yet, and is
//! only ever mutated through the settings service's save path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{Config, DEFAULT_SITEMAP_UPDATE_INTERVAL, DEFAULT_SITE_TAGLINE};

/// The active site configuration: upstream endpoints, site identity, SEO
/// templates, Open Graph images, sitemap bookkeeping and ad snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SiteSettings {
    // Upstream WordPress API
    pub api_url: String,
    pub filters_api_url: String,
    pub auth_token: String,
    pub wp_posts_api_url: String,
    pub wp_jobs_api_url: String,
    pub wp_auth_token: String,

    // Site identity
    pub site_title: String,
    pub site_tagline: String,
    pub site_description: String,
    pub site_url: String,
    pub ga_id: String,
    pub gtm_id: String,

    // Dynamic SEO templates ({{kategori}}, {{lokasi}}, {{site_title}})
    pub category_page_title_template: String,
    pub category_page_description_template: String,
    pub location_page_title_template: String,
    pub location_page_description_template: String,

    // Archive page SEO
    pub jobs_title: String,
    pub jobs_description: String,
    pub articles_title: String,
    pub articles_description: String,

    // Auth page SEO
    pub login_page_title: String,
    pub login_page_description: String,
    pub signup_page_title: String,
    pub signup_page_description: String,
    pub profile_page_title: String,
    pub profile_page_description: String,

    // Open Graph images
    pub home_og_image: String,
    pub jobs_og_image: String,
    pub articles_og_image: String,
    pub default_job_og_image: String,
    pub default_article_og_image: String,

    // Sitemap bookkeeping
    pub sitemap_update_interval: i32,
    pub auto_generate_sitemap: bool,
    pub last_sitemap_update: DateTime<Utc>,

    pub robots_txt: String,

    // Advertisement snippets by placement
    pub popup_ad_code: String,
    pub sidebar_archive_ad_code: String,
    pub sidebar_single_ad_code: String,
    pub single_top_ad_code: String,
    pub single_bottom_ad_code: String,
    pub single_middle_ad_code: String,
}

macro_rules! merge_fields {
    ($dst:expr, $src:expr, [$($field:ident),* $(,)?]) => {
        $( if let Some(value) = $src.$field { $dst.$field = value; } )*
    };
}

impl SiteSettings {
    /// Hardcoded fallback record, seeded from environment configuration.
    pub fn defaults(config: &Config) -> Self {
        Self {
            api_url: config.wp_api_url.clone(),
            filters_api_url: config.wp_filters_api_url.clone(),
            auth_token: config.wp_auth_token.clone(),
            wp_posts_api_url: config.wp_posts_api_url.clone(),
            wp_jobs_api_url: config.wp_api_url.clone(),
            wp_auth_token: config.wp_auth_token.clone(),

            site_title: config.site_name.clone(),
            site_tagline: DEFAULT_SITE_TAGLINE.to_string(),
            site_description: config.site_description.clone(),
            site_url: config.site_url.clone(),
            ga_id: config.ga_id.clone(),
            gtm_id: config.gtm_id.clone(),

            category_page_title_template: "Lowongan Kerja {{kategori}} - {{site_title}}".to_string(),
            category_page_description_template:
                "Temukan lowongan kerja {{kategori}} terbaru. Dapatkan pekerjaan impian Anda dengan gaji terbaik di {{site_title}}."
                    .to_string(),
            location_page_title_template: "Lowongan Kerja di {{lokasi}} - {{site_title}}".to_string(),
            location_page_description_template:
                "Temukan lowongan kerja terbaru di {{lokasi}}. Dapatkan pekerjaan impian Anda dengan gaji terbaik di {{site_title}}."
                    .to_string(),

            jobs_title: "Lowongan Kerja Terbaru - {{site_title}}".to_string(),
            jobs_description:
                "Temukan lowongan kerja terbaru dari berbagai perusahaan terpercaya. Dapatkan pekerjaan impian Anda dengan gaji terbaik."
                    .to_string(),
            articles_title: "Tips Karir & Panduan Kerja - {{site_title}}".to_string(),
            articles_description:
                "Artikel dan panduan karir terbaru untuk membantu perjalanan karir Anda. Tips interview, CV, dan pengembangan karir."
                    .to_string(),

            login_page_title: "Login - {{site_title}}".to_string(),
            login_page_description:
                "Masuk ke akun Nexjob Anda untuk mengakses fitur lengkap pencarian kerja dan menyimpan lowongan favorit."
                    .to_string(),
            signup_page_title: "Daftar Akun - {{site_title}}".to_string(),
            signup_page_description:
                "Daftar akun gratis di Nexjob untuk menyimpan lowongan favorit dan mendapatkan notifikasi pekerjaan terbaru."
                    .to_string(),
            profile_page_title: "Profil Saya - {{site_title}}".to_string(),
            profile_page_description: "Kelola profil dan preferensi akun Nexjob Anda.".to_string(),

            home_og_image: format!("{}/og-home.jpg", config.site_url),
            jobs_og_image: format!("{}/og-jobs.jpg", config.site_url),
            articles_og_image: format!("{}/og-articles.jpg", config.site_url),
            default_job_og_image: format!("{}/og-job-default.jpg", config.site_url),
            default_article_og_image: format!("{}/og-article-default.jpg", config.site_url),

            sitemap_update_interval: DEFAULT_SITEMAP_UPDATE_INTERVAL,
            auto_generate_sitemap: true,
            last_sitemap_update: Utc::now(),

            robots_txt: default_robots_txt(&config.site_url),

            popup_ad_code: String::new(),
            sidebar_archive_ad_code: String::new(),
            sidebar_single_ad_code: String::new(),
            single_top_ad_code: String::new(),
            single_bottom_ad_code: String::new(),
            single_middle_ad_code: String::new(),
        }
    }

    /// Get the ad snippet for a placement.
    pub fn ad_code(&self, placement: AdPlacement) -> &str {
        match placement {
            AdPlacement::Popup => &self.popup_ad_code,
            AdPlacement::SidebarArchive => &self.sidebar_archive_ad_code,
            AdPlacement::SidebarSingle => &self.sidebar_single_ad_code,
            AdPlacement::SingleTop => &self.single_top_ad_code,
            AdPlacement::SingleBottom => &self.single_bottom_ad_code,
            AdPlacement::SingleMiddle => &self.single_middle_ad_code,
        }
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, update: SettingsUpdate) {
        merge_fields!(self, update, [
            api_url,
            filters_api_url,
            auth_token,
            wp_posts_api_url,
            wp_jobs_api_url,
            wp_auth_token,
            site_title,
            site_tagline,
            site_description,
            site_url,
            ga_id,
            gtm_id,
            category_page_title_template,
            category_page_description_template,
            location_page_title_template,
            location_page_description_template,
            jobs_title,
            jobs_description,
            articles_title,
            articles_description,
            login_page_title,
            login_page_description,
            signup_page_title,
            signup_page_description,
            profile_page_title,
            profile_page_description,
            home_og_image,
            jobs_og_image,
            articles_og_image,
            default_job_og_image,
            default_article_og_image,
            sitemap_update_interval,
            auto_generate_sitemap,
            robots_txt,
            popup_ad_code,
            sidebar_archive_ad_code,
            sidebar_single_ad_code,
            single_top_ad_code,
            single_bottom_ad_code,
            single_middle_ad_code,
        ]);
    }
}

/// Partial settings payload, as edited by the admin back office.
///
/// `last_sitemap_update` is deliberately absent: the generation timestamp is
/// only stamped through the sitemap bookkeeping path.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct SettingsUpdate {
    pub api_url: Option<String>,
    pub filters_api_url: Option<String>,
    pub auth_token: Option<String>,
    pub wp_posts_api_url: Option<String>,
    pub wp_jobs_api_url: Option<String>,
    pub wp_auth_token: Option<String>,
    #[validate(length(min = 1, message = "Site title must not be empty"))]
    pub site_title: Option<String>,
    pub site_tagline: Option<String>,
    pub site_description: Option<String>,
    pub site_url: Option<String>,
    pub ga_id: Option<String>,
    pub gtm_id: Option<String>,
    pub category_page_title_template: Option<String>,
    pub category_page_description_template: Option<String>,
    pub location_page_title_template: Option<String>,
    pub location_page_description_template: Option<String>,
    pub jobs_title: Option<String>,
    pub jobs_description: Option<String>,
    pub articles_title: Option<String>,
    pub articles_description: Option<String>,
    pub login_page_title: Option<String>,
    pub login_page_description: Option<String>,
    pub signup_page_title: Option<String>,
    pub signup_page_description: Option<String>,
    pub profile_page_title: Option<String>,
    pub profile_page_description: Option<String>,
    pub home_og_image: Option<String>,
    pub jobs_og_image: Option<String>,
    pub articles_og_image: Option<String>,
    pub default_job_og_image: Option<String>,
    pub default_article_og_image: Option<String>,
    #[validate(range(min = 60, message = "Sitemap interval must be at least 60 seconds"))]
    pub sitemap_update_interval: Option<i32>,
    pub auto_generate_sitemap: Option<bool>,
    pub robots_txt: Option<String>,
    pub popup_ad_code: Option<String>,
    pub sidebar_archive_ad_code: Option<String>,
    pub sidebar_single_ad_code: Option<String>,
    pub single_top_ad_code: Option<String>,
    pub single_bottom_ad_code: Option<String>,
    pub single_middle_ad_code: Option<String>,
}

/// Advertisement placement positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdPlacement {
    Popup,
    SidebarArchive,
    SidebarSingle,
    SingleTop,
    SingleBottom,
    SingleMiddle,
}

impl std::str::FromStr for AdPlacement {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popup" => Ok(AdPlacement::Popup),
            "sidebar_archive" => Ok(AdPlacement::SidebarArchive),
            "sidebar_single" => Ok(AdPlacement::SidebarSingle),
            "single_top" => Ok(AdPlacement::SingleTop),
            "single_bottom" => Ok(AdPlacement::SingleBottom),
            "single_middle" => Ok(AdPlacement::SingleMiddle),
            _ => Err(()),
        }
    }
}

fn default_robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         \n\
         # Disallow admin panel\n\
         Disallow: /admin/\n\
         Disallow: /admin\n\
         \n\
         # Disallow bookmarks (private pages)\n\
         Disallow: /bookmarks/\n\
         Disallow: /bookmarks\n\
         \n\
         # Allow specific important pages\n\
         Allow: /lowongan-kerja/\n\
         Allow: /artikel/\n\
         \n\
         # Sitemaps\n\
         Sitemap: {site_url}/sitemap.xml\n"
    )
}
