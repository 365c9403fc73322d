//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod ad_service;
mod authorization;
pub mod container;
mod seo_service;
mod settings_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use ad_service::{insert_middle_ad, AdManager, AdService};
pub use authorization::{AuthorizationService, ProfileAuthorizer};
pub use seo_service::{CategoryPageMeta, LocationPageMeta, PageMeta, SeoBuilder, SeoService};
pub use settings_service::{FetchOptions, SaveResult, SettingsResolver, SettingsService};

#[cfg(any(test, feature = "test-utils"))]
pub use authorization::MockAuthorizationService;
#[cfg(any(test, feature = "test-utils"))]
pub use settings_service::MockSettingsService;
