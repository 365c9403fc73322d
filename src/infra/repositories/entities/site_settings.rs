//! Site settings entity for the site_settings table.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::SiteSettings;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub api_url: String,
    #[sea_orm(column_type = "Text")]
    pub filters_api_url: String,
    #[sea_orm(column_type = "Text")]
    pub auth_token: String,
    #[sea_orm(column_type = "Text")]
    pub wp_posts_api_url: String,
    #[sea_orm(column_type = "Text")]
    pub wp_jobs_api_url: String,
    #[sea_orm(column_type = "Text")]
    pub wp_auth_token: String,

    #[sea_orm(column_type = "Text")]
    pub site_title: String,
    #[sea_orm(column_type = "Text")]
    pub site_tagline: String,
    #[sea_orm(column_type = "Text")]
    pub site_description: String,
    #[sea_orm(column_type = "Text")]
    pub site_url: String,
    #[sea_orm(column_type = "Text")]
    pub ga_id: String,
    #[sea_orm(column_type = "Text")]
    pub gtm_id: String,

    #[sea_orm(column_type = "Text")]
    pub category_page_title_template: String,
    #[sea_orm(column_type = "Text")]
    pub category_page_description_template: String,
    #[sea_orm(column_type = "Text")]
    pub location_page_title_template: String,
    #[sea_orm(column_type = "Text")]
    pub location_page_description_template: String,

    #[sea_orm(column_type = "Text")]
    pub jobs_title: String,
    #[sea_orm(column_type = "Text")]
    pub jobs_description: String,
    #[sea_orm(column_type = "Text")]
    pub articles_title: String,
    #[sea_orm(column_type = "Text")]
    pub articles_description: String,

    #[sea_orm(column_type = "Text")]
    pub login_page_title: String,
    #[sea_orm(column_type = "Text")]
    pub login_page_description: String,
    #[sea_orm(column_type = "Text")]
    pub signup_page_title: String,
    #[sea_orm(column_type = "Text")]
    pub signup_page_description: String,
    #[sea_orm(column_type = "Text")]
    pub profile_page_title: String,
    #[sea_orm(column_type = "Text")]
    pub profile_page_description: String,

    #[sea_orm(column_type = "Text")]
    pub home_og_image: String,
    #[sea_orm(column_type = "Text")]
    pub jobs_og_image: String,
    #[sea_orm(column_type = "Text")]
    pub articles_og_image: String,
    #[sea_orm(column_type = "Text")]
    pub default_job_og_image: String,
    #[sea_orm(column_type = "Text")]
    pub default_article_og_image: String,

    pub sitemap_update_interval: i32,
    pub auto_generate_sitemap: bool,
    pub last_sitemap_update: DateTimeUtc,

    #[sea_orm(column_type = "Text")]
    pub robots_txt: String,

    #[sea_orm(column_type = "Text")]
    pub popup_ad_code: String,
    #[sea_orm(column_type = "Text")]
    pub sidebar_archive_ad_code: String,
    #[sea_orm(column_type = "Text")]
    pub sidebar_single_ad_code: String,
    #[sea_orm(column_type = "Text")]
    pub single_top_ad_code: String,
    #[sea_orm(column_type = "Text")]
    pub single_bottom_ad_code: String,
    #[sea_orm(column_type = "Text")]
    pub single_middle_ad_code: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SiteSettings {
    fn from(model: Model) -> Self {
        Self {
            api_url: model.api_url,
            filters_api_url: model.filters_api_url,
            auth_token: model.auth_token,
            wp_posts_api_url: model.wp_posts_api_url,
            wp_jobs_api_url: model.wp_jobs_api_url,
            wp_auth_token: model.wp_auth_token,
            site_title: model.site_title,
            site_tagline: model.site_tagline,
            site_description: model.site_description,
            site_url: model.site_url,
            ga_id: model.ga_id,
            gtm_id: model.gtm_id,
            category_page_title_template: model.category_page_title_template,
            category_page_description_template: model.category_page_description_template,
            location_page_title_template: model.location_page_title_template,
            location_page_description_template: model.location_page_description_template,
            jobs_title: model.jobs_title,
            jobs_description: model.jobs_description,
            articles_title: model.articles_title,
            articles_description: model.articles_description,
            login_page_title: model.login_page_title,
            login_page_description: model.login_page_description,
            signup_page_title: model.signup_page_title,
            signup_page_description: model.signup_page_description,
            profile_page_title: model.profile_page_title,
            profile_page_description: model.profile_page_description,
            home_og_image: model.home_og_image,
            jobs_og_image: model.jobs_og_image,
            articles_og_image: model.articles_og_image,
            default_job_og_image: model.default_job_og_image,
            default_article_og_image: model.default_article_og_image,
            sitemap_update_interval: model.sitemap_update_interval,
            auto_generate_sitemap: model.auto_generate_sitemap,
            last_sitemap_update: model.last_sitemap_update,
            robots_txt: model.robots_txt,
            popup_ad_code: model.popup_ad_code,
            sidebar_archive_ad_code: model.sidebar_archive_ad_code,
            sidebar_single_ad_code: model.sidebar_single_ad_code,
            single_top_ad_code: model.single_top_ad_code,
            single_bottom_ad_code: model.single_bottom_ad_code,
            single_middle_ad_code: model.single_middle_ad_code,
        }
    }
}

/// Build an insertable row from a full settings record.
pub fn active_model_from(settings: SiteSettings, id: Uuid, now: DateTimeUtc) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        api_url: Set(settings.api_url),
        filters_api_url: Set(settings.filters_api_url),
        auth_token: Set(settings.auth_token),
        wp_posts_api_url: Set(settings.wp_posts_api_url),
        wp_jobs_api_url: Set(settings.wp_jobs_api_url),
        wp_auth_token: Set(settings.wp_auth_token),
        site_title: Set(settings.site_title),
        site_tagline: Set(settings.site_tagline),
        site_description: Set(settings.site_description),
        site_url: Set(settings.site_url),
        ga_id: Set(settings.ga_id),
        gtm_id: Set(settings.gtm_id),
        category_page_title_template: Set(settings.category_page_title_template),
        category_page_description_template: Set(settings.category_page_description_template),
        location_page_title_template: Set(settings.location_page_title_template),
        location_page_description_template: Set(settings.location_page_description_template),
        jobs_title: Set(settings.jobs_title),
        jobs_description: Set(settings.jobs_description),
        articles_title: Set(settings.articles_title),
        articles_description: Set(settings.articles_description),
        login_page_title: Set(settings.login_page_title),
        login_page_description: Set(settings.login_page_description),
        signup_page_title: Set(settings.signup_page_title),
        signup_page_description: Set(settings.signup_page_description),
        profile_page_title: Set(settings.profile_page_title),
        profile_page_description: Set(settings.profile_page_description),
        home_og_image: Set(settings.home_og_image),
        jobs_og_image: Set(settings.jobs_og_image),
        articles_og_image: Set(settings.articles_og_image),
        default_job_og_image: Set(settings.default_job_og_image),
        default_article_og_image: Set(settings.default_article_og_image),
        sitemap_update_interval: Set(settings.sitemap_update_interval),
        auto_generate_sitemap: Set(settings.auto_generate_sitemap),
        last_sitemap_update: Set(settings.last_sitemap_update),
        robots_txt: Set(settings.robots_txt),
        popup_ad_code: Set(settings.popup_ad_code),
        sidebar_archive_ad_code: Set(settings.sidebar_archive_ad_code),
        sidebar_single_ad_code: Set(settings.sidebar_single_ad_code),
        single_top_ad_code: Set(settings.single_top_ad_code),
        single_bottom_ad_code: Set(settings.single_bottom_ad_code),
        single_middle_ad_code: Set(settings.single_middle_ad_code),
        created_at: Set(now),
        updated_at: Set(now),
    }
}
