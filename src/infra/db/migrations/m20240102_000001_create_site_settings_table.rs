//! Migration: Create site_settings table.
//!
//! One logical settings record; reads always take the newest row by
//! created_at, writes update it in place.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn text_col(col: SiteSettings) -> ColumnDef {
    ColumnDef::new(col)
        .text()
        .not_null()
        .default("")
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(text_col(SiteSettings::ApiUrl))
                    .col(text_col(SiteSettings::FiltersApiUrl))
                    .col(text_col(SiteSettings::AuthToken))
                    .col(text_col(SiteSettings::WpPostsApiUrl))
                    .col(text_col(SiteSettings::WpJobsApiUrl))
                    .col(text_col(SiteSettings::WpAuthToken))
                    .col(text_col(SiteSettings::SiteTitle))
                    .col(text_col(SiteSettings::SiteTagline))
                    .col(text_col(SiteSettings::SiteDescription))
                    .col(text_col(SiteSettings::SiteUrl))
                    .col(text_col(SiteSettings::GaId))
                    .col(text_col(SiteSettings::GtmId))
                    .col(text_col(SiteSettings::CategoryPageTitleTemplate))
                    .col(text_col(SiteSettings::CategoryPageDescriptionTemplate))
                    .col(text_col(SiteSettings::LocationPageTitleTemplate))
                    .col(text_col(SiteSettings::LocationPageDescriptionTemplate))
                    .col(text_col(SiteSettings::JobsTitle))
                    .col(text_col(SiteSettings::JobsDescription))
                    .col(text_col(SiteSettings::ArticlesTitle))
                    .col(text_col(SiteSettings::ArticlesDescription))
                    .col(text_col(SiteSettings::LoginPageTitle))
                    .col(text_col(SiteSettings::LoginPageDescription))
                    .col(text_col(SiteSettings::SignupPageTitle))
                    .col(text_col(SiteSettings::SignupPageDescription))
                    .col(text_col(SiteSettings::ProfilePageTitle))
                    .col(text_col(SiteSettings::ProfilePageDescription))
                    .col(text_col(SiteSettings::HomeOgImage))
                    .col(text_col(SiteSettings::JobsOgImage))
                    .col(text_col(SiteSettings::ArticlesOgImage))
                    .col(text_col(SiteSettings::DefaultJobOgImage))
                    .col(text_col(SiteSettings::DefaultArticleOgImage))
                    .col(
                        ColumnDef::new(SiteSettings::SitemapUpdateInterval)
                            .integer()
                            .not_null()
                            .default(300),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::AutoGenerateSitemap)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::LastSitemapUpdate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(text_col(SiteSettings::RobotsTxt))
                    .col(text_col(SiteSettings::PopupAdCode))
                    .col(text_col(SiteSettings::SidebarArchiveAdCode))
                    .col(text_col(SiteSettings::SidebarSingleAdCode))
                    .col(text_col(SiteSettings::SingleTopAdCode))
                    .col(text_col(SiteSettings::SingleBottomAdCode))
                    .col(text_col(SiteSettings::SingleMiddleAdCode))
                    .col(
                        ColumnDef::new(SiteSettings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SiteSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Reads select the newest row
        manager
            .create_index(
                Index::create()
                    .name("idx_site_settings_created_at")
                    .table(SiteSettings::Table)
                    .col(SiteSettings::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SiteSettings {
    Table,
    Id,
    ApiUrl,
    FiltersApiUrl,
    AuthToken,
    WpPostsApiUrl,
    WpJobsApiUrl,
    WpAuthToken,
    SiteTitle,
    SiteTagline,
    SiteDescription,
    SiteUrl,
    GaId,
    GtmId,
    CategoryPageTitleTemplate,
    CategoryPageDescriptionTemplate,
    LocationPageTitleTemplate,
    LocationPageDescriptionTemplate,
    JobsTitle,
    JobsDescription,
    ArticlesTitle,
    ArticlesDescription,
    LoginPageTitle,
    LoginPageDescription,
    SignupPageTitle,
    SignupPageDescription,
    ProfilePageTitle,
    ProfilePageDescription,
    HomeOgImage,
    JobsOgImage,
    ArticlesOgImage,
    DefaultJobOgImage,
    DefaultArticleOgImage,
    SitemapUpdateInterval,
    AutoGenerateSitemap,
    LastSitemapUpdate,
    RobotsTxt,
    PopupAdCode,
    SidebarArchiveAdCode,
    SidebarSingleAdCode,
    SingleTopAdCode,
    SingleBottomAdCode,
    SingleMiddleAdCode,
    CreatedAt,
    UpdatedAt,
}
