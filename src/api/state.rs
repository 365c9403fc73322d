//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AdService, SeoService, Services, ServiceContainer, SettingsService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Settings service
    pub settings_service: Arc<dyn SettingsService>,
    /// SEO service
    pub seo_service: Arc<dyn SeoService>,
    /// Advertisement service
    pub ad_service: Arc<dyn AdService>,
    /// Privileged database connection (health checks)
    pub database: Arc<Database>,
    /// Application configuration (JWT verification)
    pub config: Config,
}

impl AppState {
    /// Create application state from database connections and config.
    pub fn from_config(primary: Arc<Database>, public: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connections(
            primary.get_connection(),
            public.get_connection(),
            config.clone(),
        );

        Self {
            settings_service: container.settings(),
            seo_service: container.seo(),
            ad_service: container.ads(),
            database: primary,
            config,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        settings_service: Arc<dyn SettingsService>,
        seo_service: Arc<dyn SeoService>,
        ad_service: Arc<dyn AdService>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            settings_service,
            seo_service,
            ad_service,
            database,
            config,
        }
    }
}
