//! Settings service behavior tests.
//!
//! Storage and authorization are replaced with counting stubs so cache and
//! gating behavior can be asserted through call counts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use nexjob::config::Config;
use nexjob::domain::{SettingsUpdate, SiteSettings};
use nexjob::errors::{AppError, AppResult};
use nexjob::infra::{SettingsCache, SettingsRepository};
use nexjob::services::{AuthorizationService, FetchOptions, SettingsResolver, SettingsService};

/// How the stub's privileged read path behaves.
#[derive(Clone, Copy)]
enum PrimaryBehavior {
    Ok,
    PermissionDenied,
    Hang,
}

/// Counting stub for the settings store.
struct StubRepo {
    stored: Option<SiteSettings>,
    row_id: Option<Uuid>,
    primary: PrimaryBehavior,
    hang_writes: bool,
    fetch_calls: AtomicUsize,
    public_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    update_calls: AtomicUsize,
    touch_calls: AtomicUsize,
}

impl StubRepo {
    fn with_row(settings: SiteSettings) -> Self {
        Self {
            stored: Some(settings),
            row_id: Some(Uuid::new_v4()),
            primary: PrimaryBehavior::Ok,
            hang_writes: false,
            fetch_calls: AtomicUsize::new(0),
            public_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            touch_calls: AtomicUsize::new(0),
        }
    }

    fn empty() -> Self {
        Self {
            stored: None,
            row_id: None,
            ..Self::with_row(stored_settings())
        }
    }

    fn primary_behavior(mut self, behavior: PrimaryBehavior) -> Self {
        self.primary = behavior;
        self
    }

    fn hanging_writes(mut self) -> Self {
        self.hang_writes = true;
        self
    }

    fn fetches(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn writes(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst) + self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsRepository for StubRepo {
    async fn fetch_latest(&self) -> AppResult<Option<SiteSettings>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.primary {
            PrimaryBehavior::Ok => Ok(self.stored.clone()),
            PrimaryBehavior::PermissionDenied => Err(AppError::Database(sea_orm::DbErr::Custom(
                "permission denied for table site_settings".to_string(),
            ))),
            PrimaryBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(self.stored.clone())
            }
        }
    }

    async fn fetch_latest_public(&self) -> AppResult<Option<SiteSettings>> {
        self.public_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.stored.clone())
    }

    async fn find_latest_id(&self) -> AppResult<Option<Uuid>> {
        Ok(self.row_id)
    }

    async fn insert(&self, settings: SiteSettings) -> AppResult<SiteSettings> {
        if self.hang_writes {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        Ok(settings)
    }

    async fn update(&self, _id: Uuid, _update: SettingsUpdate) -> AppResult<SiteSettings> {
        if self.hang_writes {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Ok(stored_settings())
    }

    async fn touch_sitemap_timestamp(&self, _id: Uuid) -> AppResult<()> {
        self.touch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Counting stub for the authorization service.
struct StubAuth {
    allow: bool,
    calls: AtomicUsize,
}

impl StubAuth {
    fn allowing() -> Self {
        Self {
            allow: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn denying() -> Self {
        Self {
            allow: false,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuthorizationService for StubAuth {
    async fn is_super_admin(&self, _user_id: Uuid) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.allow
    }
}

fn stored_settings() -> SiteSettings {
    let mut settings = SiteSettings::defaults(&Config::from_env());
    settings.site_title = "Stored Title".to_string();
    settings
}

fn resolver(repo: Arc<StubRepo>, auth: Arc<StubAuth>) -> SettingsResolver {
    SettingsResolver::new(repo, auth, Arc::new(SettingsCache::new()), Config::from_env())
}

#[tokio::test]
async fn second_read_within_ttl_does_not_hit_storage() {
    let repo = Arc::new(StubRepo::with_row(stored_settings()));
    let service = resolver(repo.clone(), Arc::new(StubAuth::denying()));

    let first = service.get_settings(FetchOptions::cached()).await;
    let second = service.get_settings(FetchOptions::cached()).await;

    assert_eq!(first.site_title, "Stored Title");
    assert_eq!(second.site_title, "Stored Title");
    assert_eq!(repo.fetches(), 1);
}

#[tokio::test]
async fn force_refresh_bypasses_the_cache() {
    let repo = Arc::new(StubRepo::with_row(stored_settings()));
    let service = resolver(repo.clone(), Arc::new(StubAuth::denying()));

    service.get_settings(FetchOptions::cached()).await;
    service.get_settings(FetchOptions::fresh()).await;

    assert_eq!(repo.fetches(), 2);
}

#[tokio::test]
async fn admin_context_always_fetches_and_never_caches() {
    let repo = Arc::new(StubRepo::with_row(stored_settings()));
    let service = resolver(repo.clone(), Arc::new(StubAuth::denying()));

    service.get_settings(FetchOptions::admin()).await;
    service.get_settings(FetchOptions::admin()).await;
    assert_eq!(repo.fetches(), 2);

    // The admin reads must not have primed the cache for regular reads.
    service.get_settings(FetchOptions::cached()).await;
    assert_eq!(repo.fetches(), 3);
}

#[tokio::test]
async fn save_clears_cache_so_next_read_fetches() {
    let repo = Arc::new(StubRepo::with_row(stored_settings()));
    let service = resolver(repo.clone(), Arc::new(StubAuth::allowing()));

    service.get_settings(FetchOptions::cached()).await;
    assert_eq!(repo.fetches(), 1);

    let result = service
        .save_settings(Uuid::new_v4(), SettingsUpdate::default())
        .await;
    assert!(result.success);
    assert_eq!(repo.update_calls.load(Ordering::SeqCst), 1);
    assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 0);

    service.get_settings(FetchOptions::cached()).await;
    assert_eq!(repo.fetches(), 2);
}

#[tokio::test]
async fn save_inserts_when_no_row_exists() {
    let repo = Arc::new(StubRepo::empty());
    let service = resolver(repo.clone(), Arc::new(StubAuth::allowing()));

    let result = service
        .save_settings(
            Uuid::new_v4(),
            SettingsUpdate {
                site_title: Some("Inserted".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.success);
    assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 1);
    assert_eq!(repo.update_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unauthorized_save_never_touches_storage() {
    let repo = Arc::new(StubRepo::with_row(stored_settings()));
    let auth = Arc::new(StubAuth::denying());
    let service = resolver(repo.clone(), auth.clone());

    let result = service
        .save_settings(Uuid::new_v4(), SettingsUpdate::default())
        .await;

    assert!(!result.success);
    assert!(result
        .error
        .as_deref()
        .unwrap()
        .starts_with("Unauthorized"));
    assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    assert_eq!(repo.writes(), 0);
}

#[tokio::test(start_paused = true)]
async fn storage_timeout_with_cold_cache_returns_defaults() {
    // Privileged reads hang past the deadline; the public tier answers with
    // no row, which synthesizes defaults.
    let repo = Arc::new(
        StubRepo::empty().primary_behavior(PrimaryBehavior::Hang),
    );
    let service = resolver(repo.clone(), Arc::new(StubAuth::denying()));

    let settings = service.get_settings(FetchOptions::cached()).await;

    let defaults = SiteSettings::defaults(&Config::from_env());
    assert_eq!(settings.site_title, defaults.site_title);
    assert_eq!(
        settings.category_page_title_template,
        defaults.category_page_title_template
    );
    assert_eq!(repo.public_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn permission_failure_retries_on_public_credential() {
    let repo = Arc::new(
        StubRepo::with_row(stored_settings()).primary_behavior(PrimaryBehavior::PermissionDenied),
    );
    let service = resolver(repo.clone(), Arc::new(StubAuth::denying()));

    let settings = service.get_settings(FetchOptions::cached()).await;

    assert_eq!(settings.site_title, "Stored Title");
    assert_eq!(repo.public_calls.load(Ordering::SeqCst), 1);

    // The public-tier result is not treated as authoritative: the next read
    // goes back to storage instead of the cache.
    service.get_settings(FetchOptions::cached()).await;
    assert_eq!(repo.fetches(), 2);
}

#[tokio::test(start_paused = true)]
async fn save_timeout_is_classified_in_the_error_message() {
    let repo = Arc::new(StubRepo::with_row(stored_settings()).hanging_writes());
    let service = resolver(repo.clone(), Arc::new(StubAuth::allowing()));

    let result = service
        .save_settings(Uuid::new_v4(), SettingsUpdate::default())
        .await;

    assert!(!result.success);
    let message = result.error.unwrap();
    assert!(message.contains("timeout"), "unexpected message: {message}");
}

#[tokio::test]
async fn sitemap_timestamp_is_gated_on_super_admin() {
    let repo = Arc::new(StubRepo::with_row(stored_settings()));
    let service = resolver(repo.clone(), Arc::new(StubAuth::denying()));
    service.touch_sitemap_timestamp(Uuid::new_v4()).await;
    assert_eq!(repo.touch_calls.load(Ordering::SeqCst), 0);

    let repo = Arc::new(StubRepo::with_row(stored_settings()));
    let service = resolver(repo.clone(), Arc::new(StubAuth::allowing()));
    service.touch_sitemap_timestamp(Uuid::new_v4()).await;
    assert_eq!(repo.touch_calls.load(Ordering::SeqCst), 1);
}
