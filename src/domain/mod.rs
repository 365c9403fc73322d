//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod catalog;
pub mod profile;
pub mod site_settings;

pub use catalog::{match_category, match_location, FilterData, LocationKind, LocationMatch, Province};
pub use profile::Profile;
pub use site_settings::{AdPlacement, SettingsUpdate, SiteSettings};
