//! In-process settings cache.
//!
//! Holds at most one settings snapshot together with its fetch time. The slot
//! is replaced wholesale under a short-lived lock (no await point ever holds
//! the guard), so concurrent readers either see the previous snapshot or the
//! new one, never a partial write. Racing refreshes after a TTL expiry are
//! last-write-wins; each snapshot is individually consistent.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::config::SETTINGS_CACHE_TTL;
use crate::domain::SiteSettings;

struct CachedEntry {
    data: SiteSettings,
    fetched_at: Instant,
}

/// TTL-bounded single-slot cache for the active settings record.
///
/// Constructed explicitly and injected into the settings service, so tests
/// can run independent instances side by side.
pub struct SettingsCache {
    slot: RwLock<Option<Arc<CachedEntry>>>,
    ttl: Duration,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::with_ttl(SETTINGS_CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Return the cached snapshot if it is younger than the TTL.
    pub fn get(&self) -> Option<SiteSettings> {
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        let entry = guard.as_ref()?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.data.clone())
        } else {
            None
        }
    }

    /// Return the cached snapshot regardless of age.
    ///
    /// Used as the degraded read path when every storage tier has failed:
    /// stale data beats hardcoded defaults.
    pub fn get_stale(&self) -> Option<SiteSettings> {
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|entry| entry.data.clone())
    }

    /// Replace the cached snapshot.
    pub fn store(&self, data: SiteSettings) {
        let entry = Arc::new(CachedEntry {
            data,
            fetched_at: Instant::now(),
        });
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(entry);
    }

    /// Drop the cached snapshot, forcing the next read to fetch.
    pub fn clear(&self) {
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        tracing::debug!("Settings cache cleared");
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn sample_settings() -> SiteSettings {
        SiteSettings::defaults(&Config::from_env())
    }

    #[test]
    fn empty_cache_misses() {
        let cache = SettingsCache::new();
        assert!(cache.get().is_none());
        assert!(cache.get_stale().is_none());
    }

    #[test]
    fn fresh_entry_hits_until_ttl() {
        let cache = SettingsCache::with_ttl(Duration::from_secs(60));
        cache.store(sample_settings());
        assert!(cache.get().is_some());
    }

    #[test]
    fn expired_entry_misses_but_stays_stale_readable() {
        let cache = SettingsCache::with_ttl(Duration::ZERO);
        cache.store(sample_settings());
        assert!(cache.get().is_none());
        assert!(cache.get_stale().is_some());
    }

    #[test]
    fn clear_drops_the_snapshot() {
        let cache = SettingsCache::with_ttl(Duration::from_secs(60));
        cache.store(sample_settings());
        cache.clear();
        assert!(cache.get().is_none());
        assert!(cache.get_stale().is_none());
    }
}
