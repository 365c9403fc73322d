//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SITE_DESCRIPTION,
    DEFAULT_SITE_NAME, DEFAULT_SITE_URL, DEFAULT_WP_API_URL, DEFAULT_WP_FILTERS_API_URL,
    DEFAULT_WP_POSTS_API_URL, MIN_JWT_SECRET_LENGTH,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Privileged connection, full read/write on settings storage
    pub database_url: String,
    /// Read-only credential used as the degraded read path
    pub public_database_url: String,
    jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,

    // Upstream WordPress API
    pub wp_api_url: String,
    pub wp_filters_api_url: String,
    pub wp_posts_api_url: String,
    pub wp_auth_token: String,

    // Site identity seeded into default settings
    pub site_name: String,
    pub site_description: String,
    pub site_url: String,
    pub ga_id: String,
    pub gtm_id: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("public_database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("wp_auth_token", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("wp_api_url", &self.wp_api_url)
            .field("wp_filters_api_url", &self.wp_filters_api_url)
            .field("site_url", &self.site_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        // Validate JWT secret length
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            // The public path falls back to the privileged URL in development,
            // where a separate read-only role usually does not exist.
            public_database_url: env::var("PUBLIC_DATABASE_URL")
                .unwrap_or_else(|_| database_url.clone()),
            database_url,
            jwt_secret,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            wp_api_url: env::var("WP_API_URL").unwrap_or_else(|_| DEFAULT_WP_API_URL.to_string()),
            wp_filters_api_url: env::var("WP_FILTERS_API_URL")
                .unwrap_or_else(|_| DEFAULT_WP_FILTERS_API_URL.to_string()),
            wp_posts_api_url: env::var("WP_POSTS_API_URL")
                .unwrap_or_else(|_| DEFAULT_WP_POSTS_API_URL.to_string()),
            wp_auth_token: env::var("WP_AUTH_TOKEN").unwrap_or_default(),
            site_name: env::var("SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string()),
            site_description: env::var("SITE_DESCRIPTION")
                .unwrap_or_else(|_| DEFAULT_SITE_DESCRIPTION.to_string()),
            site_url: env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            ga_id: env::var("GA_ID").unwrap_or_default(),
            gtm_id: env::var("GTM_ID").unwrap_or_default(),
        }
    }

    /// Get JWT secret bytes for token verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
