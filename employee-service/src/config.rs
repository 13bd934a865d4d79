use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmployeeServiceConfig {
    /// Prefix every route is mounted under, e.g. `/api/v1`.
    pub base_path: String,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
}

impl Default for EmployeeServiceConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/v1".to_string(),
            cors: CorsConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

/// The single Basic credential pair. The plain password only lives here until
/// it is hashed at startup.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "user".to_string(),
            password: "user123".to_string(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl EmployeeServiceConfig {
    /// Loads the TOML file at `path`, or the defaults when it does not exist.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            tracing::info!("Config file not found at {path}, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;

        tracing::info!(?config, "Loaded employee-service config from {path}");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies `BASIC_AUTH_USERNAME`, `BASIC_AUTH_PASSWORD` and
    /// `CORS_ALLOWED_ORIGIN` on top of the file values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(username) = lookup("BASIC_AUTH_USERNAME") {
            self.auth.username = username;
        }
        if let Some(password) = lookup("BASIC_AUTH_PASSWORD") {
            self.auth.password = password;
        }
        if let Some(origin) = lookup("CORS_ALLOWED_ORIGIN") {
            self.cors.allowed_origin = origin;
        }
        self
    }

    /// Base path with a single leading slash and no trailing slash.
    /// `None` means routes are mounted at the root.
    pub fn normalized_base_path(&self) -> Option<String> {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}
