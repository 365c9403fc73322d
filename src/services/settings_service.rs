//! Settings service - tiered reads and gated writes for the site settings.
//!
//! Reads never fail: they walk an ordered list of tiers (fresh cache,
//! privileged storage, public storage, stale cache, hardcoded defaults) and
//! always hand the caller a usable record. Writes require the super-admin
//! role and come back as an explicit success/error result instead of an
//! error type, so callers branch on `success`.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::time::timeout;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{
    Config, AUTH_CHECK_TIMEOUT, SETTINGS_FETCH_TIMEOUT, SETTINGS_LOOKUP_TIMEOUT,
    SETTINGS_SAVE_TIMEOUT,
};
use crate::domain::{SettingsUpdate, SiteSettings};
use crate::errors::{AppError, AppResult};
use crate::infra::{SettingsCache, SettingsRepository};
use crate::services::AuthorizationService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// How a settings read should treat the cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Skip the fresh-cache tier
    pub force_refresh: bool,
    /// Admin back-office context: never read from or write to the cache
    pub admin_context: bool,
}

impl FetchOptions {
    /// Default read: cache first.
    pub fn cached() -> Self {
        Self::default()
    }

    /// Skip the cache for this read, but still populate it.
    pub fn fresh() -> Self {
        Self {
            force_refresh: true,
            admin_context: false,
        }
    }

    /// Admin back-office read: always fetch, never cache.
    pub fn admin() -> Self {
        Self {
            force_refresh: true,
            admin_context: true,
        }
    }
}

/// Outcome of a settings write.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }

    /// True when the failure was an authorization rejection.
    pub fn is_unauthorized(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|msg| msg.starts_with("Unauthorized"))
    }
}

/// Settings service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Resolve the active settings record; never fails
    async fn get_settings(&self, opts: FetchOptions) -> SiteSettings;

    /// Persist a partial settings update on behalf of `caller`
    async fn save_settings(&self, caller: Uuid, update: SettingsUpdate) -> SaveResult;

    /// Stamp the last sitemap generation time on behalf of `caller`
    async fn touch_sitemap_timestamp(&self, caller: Uuid);

    /// Drop the cached snapshot
    fn clear_cache(&self);
}

/// Concrete implementation with tiered fallback.
pub struct SettingsResolver {
    repo: Arc<dyn SettingsRepository>,
    authz: Arc<dyn AuthorizationService>,
    cache: Arc<SettingsCache>,
    config: Config,
}

impl SettingsResolver {
    /// Create new settings service instance
    pub fn new(
        repo: Arc<dyn SettingsRepository>,
        authz: Arc<dyn AuthorizationService>,
        cache: Arc<SettingsCache>,
        config: Config,
    ) -> Self {
        Self {
            repo,
            authz,
            cache,
            config,
        }
    }

    /// Tier 1: newest record over the privileged connection, bounded.
    ///
    /// A missing row synthesizes the default record rather than failing;
    /// the row is created lazily by the first save.
    async fn fetch_primary(&self) -> AppResult<SiteSettings> {
        let fetched = timeout(SETTINGS_FETCH_TIMEOUT, self.repo.fetch_latest())
            .await
            .map_err(|_| AppError::timeout("Settings fetch"))??;

        Ok(fetched.unwrap_or_else(|| {
            tracing::warn!("No settings record found, synthesizing defaults");
            SiteSettings::defaults(&self.config)
        }))
    }

    /// Tier 2: same read over the public read-only credential.
    async fn fetch_public(&self) -> AppResult<SiteSettings> {
        let fetched = timeout(SETTINGS_FETCH_TIMEOUT, self.repo.fetch_latest_public())
            .await
            .map_err(|_| AppError::timeout("Public settings fetch"))??;

        Ok(fetched.unwrap_or_else(|| SiteSettings::defaults(&self.config)))
    }

    async fn bounded_super_admin_check(&self, caller: Uuid) -> bool {
        match timeout(AUTH_CHECK_TIMEOUT, self.authz.is_super_admin(caller)).await {
            Ok(authorized) => authorized,
            Err(_) => {
                tracing::warn!(caller = %caller, "Super admin check timed out");
                false
            }
        }
    }
}

#[async_trait]
impl SettingsService for SettingsResolver {
    async fn get_settings(&self, opts: FetchOptions) -> SiteSettings {
        // Tier 0: fresh cache
        if !opts.force_refresh && !opts.admin_context {
            if let Some(cached) = self.cache.get() {
                tracing::debug!("Using cached settings");
                return cached;
            }
        }

        tracing::debug!("Fetching fresh settings from storage");

        // Tier 1: privileged storage
        match self.fetch_primary().await {
            Ok(settings) => {
                if !opts.admin_context {
                    self.cache.store(settings.clone());
                }
                return settings;
            }
            Err(e) if is_access_shaped(&e) => {
                tracing::warn!(error = %e, "Privileged settings fetch failed, retrying on public credential");

                // Tier 2: public storage. The result serves this request
                // only; it is never cached as authoritative.
                match self.fetch_public().await {
                    Ok(settings) => return settings,
                    Err(e) => tracing::warn!(error = %e, "Public settings fetch failed"),
                }
            }
            Err(e) => tracing::warn!(error = %e, "Settings fetch failed"),
        }

        // Tier 3: stale cache beats hardcoded defaults
        if let Some(stale) = self.cache.get_stale() {
            tracing::warn!("Serving stale cached settings after storage failure");
            return stale;
        }

        tracing::warn!("Serving default settings after storage failure");
        SiteSettings::defaults(&self.config)
    }

    async fn save_settings(&self, caller: Uuid, update: SettingsUpdate) -> SaveResult {
        // Authorization failures are terminal: no retry, storage untouched.
        if !self.bounded_super_admin_check(caller).await {
            return SaveResult::failure("Unauthorized: super admin access required");
        }

        // A failed lookup degrades to the insert path rather than aborting
        // the save; the row is created lazily when absent.
        let existing_id = match timeout(SETTINGS_LOOKUP_TIMEOUT, self.repo.find_latest_id()).await
        {
            Ok(Ok(id)) => id,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Existing settings lookup failed, will insert");
                None
            }
            Err(_) => {
                tracing::warn!("Existing settings lookup timed out, will insert");
                None
            }
        };

        let result = match existing_id {
            Some(id) => timeout(SETTINGS_SAVE_TIMEOUT, self.repo.update(id, update)).await,
            None => {
                let mut settings = SiteSettings::defaults(&self.config);
                settings.apply(update);
                timeout(SETTINGS_SAVE_TIMEOUT, self.repo.insert(settings)).await
            }
        };

        match result {
            Ok(Ok(_)) => {
                self.cache.clear();
                tracing::info!("Settings saved");
                SaveResult::ok()
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Settings save failed");
                SaveResult::failure(save_error_message(&e))
            }
            Err(_) => {
                tracing::error!("Settings save timed out");
                SaveResult::failure(TIMEOUT_MESSAGE)
            }
        }
    }

    async fn touch_sitemap_timestamp(&self, caller: Uuid) {
        if !self.bounded_super_admin_check(caller).await {
            return;
        }

        let existing_id = match self.repo.find_latest_id().await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(error = %e, "Sitemap timestamp lookup failed");
                return;
            }
        };

        let Some(id) = existing_id else {
            return;
        };

        match self.repo.touch_sitemap_timestamp(id).await {
            Ok(()) => self.cache.clear(),
            Err(e) => tracing::error!(error = %e, "Sitemap timestamp update failed"),
        }
    }

    fn clear_cache(&self) {
        self.cache.clear();
    }
}

const TIMEOUT_MESSAGE: &str = "Request timeout - please check your connection and try again";

/// Whether a tier-1 failure warrants the public-credential retry.
fn is_access_shaped(err: &AppError) -> bool {
    match err {
        AppError::Timeout(_) => true,
        AppError::Database(db) => {
            let msg = db.to_string().to_lowercase();
            msg.contains("permission") || msg.contains("denied") || msg.contains("row-level")
        }
        _ => false,
    }
}

/// Map a write failure to the message surfaced to the admin UI.
fn save_error_message(err: &AppError) -> String {
    match err {
        AppError::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
        AppError::Database(db) => {
            let msg = db.to_string();
            let lowered = msg.to_lowercase();
            if lowered.contains("network") || lowered.contains("connection") {
                "Network error - please check your internet connection".to_string()
            } else {
                msg
            }
        }
        other => other.to_string(),
    }
}
