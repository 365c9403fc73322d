//! Service Container - Centralized service access.
//!
//! Owns the composition root: repositories, the injectable settings cache
//! and every service built on top of them.

use std::sync::Arc;

use super::{
    AdManager, AdService, AuthorizationService, ProfileAuthorizer, SeoBuilder, SeoService,
    SettingsResolver, SettingsService,
};
use crate::config::Config;
use crate::infra::{ProfileStore, SettingsCache, SettingsStore, WpFiltersClient};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get settings service
    fn settings(&self) -> Arc<dyn SettingsService>;

    /// Get SEO service
    fn seo(&self) -> Arc<dyn SeoService>;

    /// Get advertisement service
    fn ads(&self) -> Arc<dyn AdService>;

    /// Get authorization service
    fn authorization(&self) -> Arc<dyn AuthorizationService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    settings_service: Arc<dyn SettingsService>,
    seo_service: Arc<dyn SeoService>,
    ad_service: Arc<dyn AdService>,
    authorization_service: Arc<dyn AuthorizationService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        settings_service: Arc<dyn SettingsService>,
        seo_service: Arc<dyn SeoService>,
        ad_service: Arc<dyn AdService>,
        authorization_service: Arc<dyn AuthorizationService>,
    ) -> Self {
        Self {
            settings_service,
            seo_service,
            ad_service,
            authorization_service,
        }
    }

    /// Create service container from database connections and config.
    ///
    /// The privileged connection backs settings writes and the primary read
    /// tier; the public connection backs the degraded read tier.
    pub fn from_connections(
        primary: sea_orm::DatabaseConnection,
        public: sea_orm::DatabaseConnection,
        config: Config,
    ) -> Self {
        let settings_repo = Arc::new(SettingsStore::new(primary.clone(), public));
        let profile_repo = Arc::new(ProfileStore::new(primary));
        let cache = Arc::new(SettingsCache::new());

        let authorization_service: Arc<dyn AuthorizationService> =
            Arc::new(ProfileAuthorizer::new(profile_repo));
        let settings_service: Arc<dyn SettingsService> = Arc::new(SettingsResolver::new(
            settings_repo,
            authorization_service.clone(),
            cache,
            config,
        ));
        let seo_service: Arc<dyn SeoService> = Arc::new(SeoBuilder::new(
            settings_service.clone(),
            Arc::new(WpFiltersClient::new()),
        ));
        let ad_service: Arc<dyn AdService> = Arc::new(AdManager::new(settings_service.clone()));

        Self {
            settings_service,
            seo_service,
            ad_service,
            authorization_service,
        }
    }
}

impl ServiceContainer for Services {
    fn settings(&self) -> Arc<dyn SettingsService> {
        self.settings_service.clone()
    }

    fn seo(&self) -> Arc<dyn SeoService> {
        self.seo_service.clone()
    }

    fn ads(&self) -> Arc<dyn AdService> {
        self.ad_service.clone()
    }

    fn authorization(&self) -> Arc<dyn AuthorizationService> {
        self.authorization_service.clone()
    }
}
