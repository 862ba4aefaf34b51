//! Backend connection settings baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so the backend URL and anon
//! key are captured with `option_env!` when the crate is compiled. Requests
//! fail with `ConfigError` at call time when they are missing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";
pub const IMAGE_BUCKET: &str = "object-images";

const BUILD_BACKEND_URL: Option<&str> = option_env!("CIRCULA_BACKEND_URL");
const BUILD_ANON_KEY: Option<&str> = option_env!("CIRCULA_BACKEND_ANON_KEY");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing backend anon key (set CIRCULA_BACKEND_ANON_KEY at build time)")]
    MissingAnonKey,
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

/// Base URL and public key of the hosted backend project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Settings captured from `CIRCULA_BACKEND_URL` / `CIRCULA_BACKEND_ANON_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error when the anon key is missing or the URL is not http(s).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(BUILD_BACKEND_URL, BUILD_ANON_KEY)
    }

    /// Build settings from optional raw values.
    ///
    /// # Errors
    ///
    /// Returns an error when the anon key is missing or the URL is not http(s).
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url));
        }
        let anon_key = anon_key
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingAnonKey)?
            .to_owned();
        Ok(Self { url, anon_key })
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    pub fn rest_url(&self, path_and_query: &str) -> String {
        format!("{}/rest/v1/{}", self.url, path_and_query.trim_start_matches('/'))
    }

    pub fn storage_upload_url(&self, bucket: &str, object_path: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{}", self.url, object_path.trim_start_matches('/'))
    }

    pub fn storage_public_url(&self, bucket: &str, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{bucket}/{}",
            self.url,
            object_path.trim_start_matches('/')
        )
    }
}
