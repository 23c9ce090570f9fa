//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `TENANT_API_URL` - Base URL of the platform tenant-lookup API
//!
//! ## Optional Variables
//!
//! - `BASE_DOMAIN` - Root domain separating main/sub/custom hostnames
//!   (default: `igrowbig.com`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TENANT_LOOKUP_TIMEOUT_SECS` - Whole-request timeout for tenant lookups
//!   (default: 10)
//! - `TENANT_CONNECT_TIMEOUT_SECS` - Connect timeout for tenant lookups
//!   (default: 5)

use anyhow::{Context, Result};
use std::env;

/// Default root domain when `BASE_DOMAIN` is unset.
pub const DEFAULT_BASE_DOMAIN: &str = "igrowbig.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root domain used to distinguish the marketing site, tenant
    /// subdomains, and tenant custom domains.
    pub base_domain: String,
    /// Base URL of the tenant-lookup API (e.g. `https://api.igrowbig.com`).
    pub tenant_api_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Whole-request timeout (seconds) for tenant-lookup calls.
    pub tenant_lookup_timeout: u64,
    /// Connect timeout (seconds) for tenant-lookup calls.
    pub tenant_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TENANT_API_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let tenant_api_url = env::var("TENANT_API_URL")
            .context("TENANT_API_URL must be set to the tenant-lookup API base URL")?;

        let base_domain =
            env::var("BASE_DOMAIN").unwrap_or_else(|_| DEFAULT_BASE_DOMAIN.to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let tenant_lookup_timeout = env::var("TENANT_LOOKUP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let tenant_connect_timeout = env::var("TENANT_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            base_domain,
            tenant_api_url,
            listen_addr,
            log_level,
            log_format,
            tenant_lookup_timeout,
            tenant_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_domain` is empty or carries a scheme/path
    /// - `tenant_api_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.base_domain.is_empty() {
            anyhow::bail!("BASE_DOMAIN must not be empty");
        }

        if self.base_domain.contains("://") || self.base_domain.contains('/') {
            anyhow::bail!(
                "BASE_DOMAIN must be a bare hostname, got '{}'",
                self.base_domain
            );
        }

        let api_url = url::Url::parse(&self.tenant_api_url).with_context(|| {
            format!("TENANT_API_URL is not a valid URL: '{}'", self.tenant_api_url)
        })?;
        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "TENANT_API_URL must use http or https, got '{}'",
                api_url.scheme()
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.tenant_lookup_timeout == 0 {
            anyhow::bail!("TENANT_LOOKUP_TIMEOUT_SECS must be greater than 0");
        }

        if self.tenant_connect_timeout == 0 {
            anyhow::bail!("TENANT_CONNECT_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base domain: {}", self.base_domain);
        tracing::info!("  Tenant API: {}", self.tenant_api_url);
        tracing::info!(
            "  Tenant lookup timeouts: {}s total / {}s connect",
            self.tenant_lookup_timeout,
            self.tenant_connect_timeout
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            base_domain: "igrowbig.com".to_string(),
            tenant_api_url: "https://api.igrowbig.com".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            tenant_lookup_timeout: 10,
            tenant_connect_timeout: 5,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Base domain must be a bare hostname
        config.base_domain = "https://igrowbig.com".to_string();
        assert!(config.validate().is_err());

        config.base_domain = String::new();
        assert!(config.validate().is_err());

        config.base_domain = "igrowbig.com".to_string();

        // Tenant API URL must carry a scheme
        config.tenant_api_url = "api.igrowbig.com".to_string();
        assert!(config.validate().is_err());

        config.tenant_api_url = "http://localhost:4000".to_string();
        assert!(config.validate().is_ok());

        // Log format is constrained
        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Listen address must carry a port
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Timeouts must be non-zero
        config.tenant_lookup_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("TENANT_API_URL", "https://api.igrowbig.com");
            env::remove_var("BASE_DOMAIN");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.base_domain, DEFAULT_BASE_DOMAIN);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.tenant_lookup_timeout, 10);

        // Cleanup
        unsafe {
            env::remove_var("TENANT_API_URL");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_tenant_api_url() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("TENANT_API_URL");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("TENANT_API_URL", "http://localhost:4000");
            env::set_var("BASE_DOMAIN", "example.test");
            env::set_var("TENANT_LOOKUP_TIMEOUT_SECS", "30");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.base_domain, "example.test");
        assert_eq!(config.tenant_api_url, "http://localhost:4000");
        assert_eq!(config.tenant_lookup_timeout, 30);

        // Cleanup
        unsafe {
            env::remove_var("TENANT_API_URL");
            env::remove_var("BASE_DOMAIN");
            env::remove_var("TENANT_LOOKUP_TIMEOUT_SECS");
        }
    }
}
