//! Connection settings for the database and the photo provider
//!
//! Values are resolved once at process start (see `pinboard-cli`) and
//! handed to the library as plain structs.

use sqlx::postgres::PgConnectOptions;

/// Default Unsplash API endpoint
pub const DEFAULT_UNSPLASH_URL: &str = "https://api.unsplash.com";

/// PostgreSQL connection descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
}

impl Default for PgSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            user: "postgres".to_string(),
            password: None,
        }
    }
}

impl PgSettings {
    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    /// `host:port/database`, safe to log.
    pub fn display_target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

/// Photo provider access settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Unsplash access key. Requests are still sent without one and fail
    /// with the provider's own error.
    pub access_key: Option<String>,
    pub base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: DEFAULT_UNSPLASH_URL.to_string(),
        }
    }
}
