//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - The upstream job-filter API client
//! - The in-process settings cache

pub mod db;
pub mod repositories;
pub mod settings_cache;
pub mod wp_client;

pub use db::{Database, Migrator};
pub use repositories::{ProfileRepository, ProfileStore, SettingsRepository, SettingsStore};
pub use settings_cache::SettingsCache;
pub use wp_client::{FilterDataProvider, WpFiltersClient};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProfileRepository, MockSettingsRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use wp_client::MockFilterDataProvider;
