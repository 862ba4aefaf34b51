//! Host configuration from the environment and the Leptos metadata.
//!
//! The listen address starts from Leptos' `site-addr` (overridable through
//! `LEPTOS_SITE_ADDR`, as cargo-leptos does) and `PORT` replaces just the
//! port when set, which is what most container platforms provide.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::config::LeptosOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Load Leptos options (from `Cargo.toml` metadata and `LEPTOS_*`) and
    /// apply the `PORT` override.
    ///
    /// # Errors
    ///
    /// Returns an error when the Leptos metadata cannot be read or `PORT` is
    /// not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = leptos::config::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos = conf.leptos_options;
        let addr = bind_addr(leptos.site_addr, std::env::var("PORT").ok().as_deref())?;
        Ok(Self { addr, leptos })
    }
}

/// Apply an optional port override to the configured address.
pub fn bind_addr(configured: SocketAddr, port_override: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = port_override.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(configured);
    };
    let port = raw
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?;
    Ok(SocketAddr::new(configured.ip(), port))
}
