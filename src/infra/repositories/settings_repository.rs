//! Settings repository with privileged and public read paths.
//!
//! Reads always target the newest row by creation time; writes update that
//! row in place or insert the first one. The public connection carries a
//! read-only credential and backs the degraded read tier.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::site_settings::{self, active_model_from, Entity as SiteSettingsEntity};
use crate::domain::{SettingsUpdate, SiteSettings};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Settings repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Fetch the newest settings record over the privileged connection
    async fn fetch_latest(&self) -> AppResult<Option<SiteSettings>>;

    /// Fetch the newest settings record over the public read-only connection
    async fn fetch_latest_public(&self) -> AppResult<Option<SiteSettings>>;

    /// Find the id of the newest settings record
    async fn find_latest_id(&self) -> AppResult<Option<Uuid>>;

    /// Insert a full settings record, returning the stored state
    async fn insert(&self, settings: SiteSettings) -> AppResult<SiteSettings>;

    /// Merge a partial update into the record with the given id
    async fn update(&self, id: Uuid, update: SettingsUpdate) -> AppResult<SiteSettings>;

    /// Stamp the last sitemap generation time on the record with the given id
    async fn touch_sitemap_timestamp(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation backed by two SeaORM connections.
pub struct SettingsStore {
    primary: DatabaseConnection,
    public: DatabaseConnection,
}

impl SettingsStore {
    /// Create new repository instance with privileged and public connections
    pub fn new(primary: DatabaseConnection, public: DatabaseConnection) -> Self {
        Self { primary, public }
    }

    async fn fetch_latest_on(
        &self,
        db: &DatabaseConnection,
    ) -> AppResult<Option<SiteSettings>> {
        let model = SiteSettingsEntity::find()
            .order_by_desc(site_settings::Column::CreatedAt)
            .limit(1)
            .one(db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(SiteSettings::from))
    }
}

#[async_trait]
impl SettingsRepository for SettingsStore {
    async fn fetch_latest(&self) -> AppResult<Option<SiteSettings>> {
        self.fetch_latest_on(&self.primary).await
    }

    async fn fetch_latest_public(&self) -> AppResult<Option<SiteSettings>> {
        self.fetch_latest_on(&self.public).await
    }

    async fn find_latest_id(&self) -> AppResult<Option<Uuid>> {
        let model = SiteSettingsEntity::find()
            .order_by_desc(site_settings::Column::CreatedAt)
            .limit(1)
            .one(&self.primary)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(|m| m.id))
    }

    async fn insert(&self, settings: SiteSettings) -> AppResult<SiteSettings> {
        let active = active_model_from(settings, Uuid::new_v4(), Utc::now());
        let model = active
            .insert(&self.primary)
            .await
            .map_err(AppError::from)?;

        Ok(SiteSettings::from(model))
    }

    async fn update(&self, id: Uuid, update: SettingsUpdate) -> AppResult<SiteSettings> {
        let model = SiteSettingsEntity::find_by_id(id)
            .one(&self.primary)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let created_at = model.created_at;
        let mut merged = SiteSettings::from(model);
        merged.apply(update);

        let mut active = active_model_from(merged, id, Utc::now());
        active.created_at = Set(created_at);

        let model = active.update(&self.primary).await.map_err(AppError::from)?;
        Ok(SiteSettings::from(model))
    }

    async fn touch_sitemap_timestamp(&self, id: Uuid) -> AppResult<()> {
        let model = SiteSettingsEntity::find_by_id(id)
            .one(&self.primary)
            .await
            .map_err(AppError::from)?
            .ok_or(AppError::NotFound)?;

        let now = Utc::now();
        let mut active: site_settings::ActiveModel = model.into();
        active.last_sitemap_update = Set(now);
        active.updated_at = Set(now);

        active.update(&self.primary).await.map_err(AppError::from)?;
        Ok(())
    }
}
