//! User profile entity backing the authorization check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ROLE_SUPER_ADMIN;

/// Profile row for an authenticated user.
///
/// Profiles are owned by the external identity provider; this service only
/// reads them to answer role questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Check whether this profile holds the super-admin role.
    pub fn is_super_admin(&self) -> bool {
        self.role == ROLE_SUPER_ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_role(role: &str) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "admin@nexjob.tech".to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn super_admin_role_is_recognized() {
        assert!(profile_with_role("super_admin").is_super_admin());
        assert!(!profile_with_role("user").is_super_admin());
        assert!(!profile_with_role("admin").is_super_admin());
    }
}
