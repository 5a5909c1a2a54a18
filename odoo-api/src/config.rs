//! Connection configuration for an Odoo server

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::service::Service;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Connection settings for one Odoo instance
///
/// The url is the server base url (e.g. `https://erp.example.com`); the
/// XML-RPC endpoint paths are joined onto it per service.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub url: String,
    pub db: String,
    pub username: String,
    pub password: String,
}

impl ClientConfig {
    pub fn new(
        url: impl Into<String>,
        db: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            db: db.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build a configuration from `ODOO_URL`, `ODOO_DB`, `ODOO_USERNAME`
    /// and `ODOO_PASSWORD`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: require_env("ODOO_URL")?,
            db: require_env("ODOO_DB")?,
            username: require_env("ODOO_USERNAME")?,
            password: require_env("ODOO_PASSWORD")?,
        })
    }

    /// Full URL for a service endpoint
    ///
    /// A trailing slash on the configured base url is tolerated.
    pub fn endpoint_url(&self, service: Service) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            service.info().endpoint
        )
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}

// Credentials must not leak through Debug output
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("db", &self.db)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
