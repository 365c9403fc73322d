//! Authorization service - answers role questions for settings writes.
//!
//! The check is deliberately a black box to its callers: every failure mode
//! (missing profile, storage error, deadline expiry) collapses to "not a
//! super admin" after logging, so a flaky profile store can never escalate
//! privileges or crash a save path.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::timeout;
use uuid::Uuid;

use crate::config::AUTH_CHECK_TIMEOUT;
use crate::infra::ProfileRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authorization service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// Check whether the given user holds the super-admin role
    async fn is_super_admin(&self, user_id: Uuid) -> bool;
}

/// Concrete implementation backed by the profiles table.
pub struct ProfileAuthorizer {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileAuthorizer {
    /// Create new authorization service instance
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl AuthorizationService for ProfileAuthorizer {
    async fn is_super_admin(&self, user_id: Uuid) -> bool {
        match timeout(AUTH_CHECK_TIMEOUT, self.profiles.find_by_id(user_id)).await {
            Ok(Ok(Some(profile))) => profile.is_super_admin(),
            Ok(Ok(None)) => false,
            Ok(Err(e)) => {
                tracing::warn!(user_id = %user_id, error = %e, "Super admin check failed");
                false
            }
            Err(_) => {
                tracing::warn!(user_id = %user_id, "Super admin check timed out");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROLE_SUPER_ADMIN;
    use crate::domain::Profile;
    use crate::errors::AppError;
    use crate::infra::MockProfileRepository;
    use chrono::Utc;

    fn profile(id: Uuid, role: &str) -> Profile {
        Profile {
            id,
            email: "admin@nexjob.tech".to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn super_admin_profile_is_authorized() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(profile(id, ROLE_SUPER_ADMIN))));

        let authz = ProfileAuthorizer::new(Arc::new(repo));
        assert!(authz.is_super_admin(user_id).await);
    }

    #[tokio::test]
    async fn regular_profile_is_not_authorized() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(profile(id, "user"))));

        let authz = ProfileAuthorizer::new(Arc::new(repo));
        assert!(!authz.is_super_admin(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn missing_profile_is_not_authorized() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let authz = ProfileAuthorizer::new(Arc::new(repo));
        assert!(!authz.is_super_admin(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn storage_error_is_not_authorized() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::internal("boom")));

        let authz = ProfileAuthorizer::new(Arc::new(repo));
        assert!(!authz.is_super_admin(Uuid::new_v4()).await);
    }
}
