//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed
//! explicitly to the components that need it.
//!
//! ## Repository Link
//!
//! The download page links to the URL in `REPOSITORY`. It is resolved with
//! the following priority:
//!
//! 1. `REPOSITORY` set in the runtime environment (or `.env`)
//! 2. `REPOSITORY` set when the binary was built (baked in via `option_env!`)
//! 3. Empty string
//!
//! ```bash
//! # Bake the link into the binary
//! REPOSITORY="https://github.com/owner/nagato" cargo build --release
//!
//! # Or override it at deploy time
//! export REPOSITORY="https://github.com/owner/nagato"
//! ```
//!
//! The value is never validated; a malformed or empty link is served as-is.
//! A runtime value that is not valid UTF-8 is still used, with invalid bytes
//! replaced by `U+FFFD`, and flagged with a warning at startup.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LEGACY_ROUTES` - Serve the page at `/download` and redirect everything there (default: `false`)
//! - `PAGE_TITLE` - Document title of the page (default: `Nagato`)

use anyhow::Result;
use std::env::{self, VarError};

use crate::domain::RepositoryLink;
use crate::routing::RoutingVariant;
use crate::web::pages::DEFAULT_TITLE;

/// Repository link captured from the build environment, if any.
const BUILD_REPOSITORY: Option<&str> = option_env!("REPOSITORY");

/// Where the repository link was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositorySource {
    /// Runtime `REPOSITORY`.
    Environment,
    /// Runtime `REPOSITORY` containing non-UTF-8 bytes, converted lossily.
    EnvironmentLossy,
    /// `REPOSITORY` captured at build time.
    BuildTime,
    /// Explicit value from the command line or a constructor.
    Explicit,
    /// Nothing configured; the link is empty.
    Unset,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    repository: RepositoryLink,
    repository_source: RepositorySource,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, the page lives at `/download` and all other paths redirect there.
    pub legacy_routes: bool,
    pub page_title: String,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub listen_addr: Option<String>,
    pub repository: Option<String>,
    pub legacy_routes: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this currently always succeeds.
    pub fn from_env() -> Result<Self> {
        let (repository, repository_source) = Self::load_repository();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let legacy_routes = env::var("LEGACY_ROUTES")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let page_title = env::var("PAGE_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string());

        Ok(Self {
            repository,
            repository_source,
            listen_addr,
            log_level,
            log_format,
            legacy_routes,
            page_title,
        })
    }

    /// Runtime `REPOSITORY` first, then the build-time value, then empty.
    fn load_repository() -> (RepositoryLink, RepositorySource) {
        match env::var("REPOSITORY") {
            Ok(value) => (value.into(), RepositorySource::Environment),
            Err(VarError::NotUnicode(raw)) => (
                raw.to_string_lossy().into_owned().into(),
                RepositorySource::EnvironmentLossy,
            ),
            Err(VarError::NotPresent) => match BUILD_REPOSITORY {
                Some(value) => (value.into(), RepositorySource::BuildTime),
                None => (RepositoryLink::default(), RepositorySource::Unset),
            },
        }
    }

    /// Creates a configuration with defaults and the given repository link.
    pub fn with_repository(repository: impl Into<RepositoryLink>) -> Self {
        Self {
            repository: repository.into(),
            repository_source: RepositorySource::Explicit,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            legacy_routes: false,
            page_title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Applies command-line overrides. A `false` flag leaves the environment value.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(listen_addr) = overrides.listen_addr {
            self.listen_addr = listen_addr;
        }
        if let Some(repository) = overrides.repository {
            self.repository = RepositoryLink::from(repository);
            self.repository_source = RepositorySource::Explicit;
        }
        if overrides.legacy_routes {
            self.legacy_routes = true;
        }
    }

    /// The configured repository link.
    pub fn repository(&self) -> &RepositoryLink {
        &self.repository
    }

    pub fn repository_source(&self) -> RepositorySource {
        self.repository_source
    }

    pub fn routing_variant(&self) -> RoutingVariant {
        if self.legacy_routes {
            RoutingVariant::Legacy
        } else {
            RoutingVariant::Canonical
        }
    }

    /// Validates the configuration.
    ///
    /// The repository link is not checked.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
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

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if self.repository_source == RepositorySource::EnvironmentLossy {
            tracing::warn!(
                "  REPOSITORY is not valid UTF-8; invalid bytes were replaced with U+FFFD"
            );
        }

        if self.repository.is_empty() {
            tracing::warn!("  Repository: <unset>, download link will be empty");
        } else if !self.repository.looks_like_url() {
            tracing::warn!("  Repository: {} (not a valid URL)", self.repository);
        } else {
            tracing::info!("  Repository: {}", self.repository);
        }

        tracing::info!("  Routes: {:?}", self.routing_variant());
        tracing::info!("  Page title: {}", self.page_title);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads configuration from environment variables, applies command-line
/// overrides, and validates the result.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(overrides: Overrides) -> Result<Config> {
    let mut config = Config::from_env()?;
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config::with_repository("https://example.com/repo");

        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_repository_is_not_validated() {
        for value in ["", "not a url", "ftp://weird"] {
            assert!(Config::with_repository(value).validate().is_ok());
        }
    }

    #[test]
    #[serial]
    fn test_repository_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("REPOSITORY", "https://github.com/owner/nagato");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.repository().as_str(),
            "https://github.com/owner/nagato"
        );

        // Cleanup
        unsafe {
            env::remove_var("REPOSITORY");
        }
    }

    #[test]
    #[serial]
    fn test_repository_empty_value_is_kept() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REPOSITORY", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.repository().as_str(), "");

        unsafe {
            env::remove_var("REPOSITORY");
        }
    }

    #[test]
    #[serial]
    fn test_repository_falls_back_to_build_value() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("REPOSITORY");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.repository().as_str(), BUILD_REPOSITORY.unwrap_or(""));
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("LEGACY_ROUTES");
            env::remove_var("PAGE_TITLE");
        }

        let config = load_from_env(Overrides::default()).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert!(!config.legacy_routes);
        assert_eq!(config.page_title, DEFAULT_TITLE);
        assert_eq!(config.routing_variant(), RoutingVariant::Canonical);
    }

    #[test]
    #[serial]
    fn test_legacy_routes_flag() {
        for (value, expected) in [("true", true), ("TRUE", true), ("1", true), ("no", false)] {
            // SAFETY: Tests are run serially
            unsafe {
                env::set_var("LEGACY_ROUTES", value);
            }

            let config = Config::from_env().unwrap();
            assert_eq!(config.legacy_routes, expected, "LEGACY_ROUTES={value}");
        }

        unsafe {
            env::remove_var("LEGACY_ROUTES");
        }
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::with_repository("https://from-env.example/repo");

        config.apply(Overrides {
            listen_addr: Some("127.0.0.1:8080".to_string()),
            repository: Some("https://from-cli.example/repo".to_string()),
            legacy_routes: true,
        });

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.repository().as_str(), "https://from-cli.example/repo");
        assert_eq!(config.routing_variant(), RoutingVariant::Legacy);
    }

    #[test]
    fn test_empty_overrides_keep_values() {
        let mut config = Config::with_repository("https://from-env.example/repo");
        config.legacy_routes = true;

        config.apply(Overrides::default());

        assert_eq!(config.repository().as_str(), "https://from-env.example/repo");
        assert!(config.legacy_routes);
    }

    #[test]
    #[serial]
    fn test_load_from_env_applies_overrides_before_validation() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "3000");
            env::set_var("REPOSITORY", "https://from-env.example/repo");
        }

        assert!(load_from_env(Overrides::default()).is_err());

        let config = load_from_env(Overrides {
            listen_addr: Some("127.0.0.1:8080".to_string()),
            repository: Some("https://from-cli.example/repo".to_string()),
            legacy_routes: false,
        })
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.repository().as_str(), "https://from-cli.example/repo");
        assert_eq!(config.repository_source(), RepositorySource::Explicit);

        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("REPOSITORY");
        }
    }

    #[test]
    #[serial]
    fn test_repository_source_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REPOSITORY", "https://github.com/owner/nagato");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.repository_source(), RepositorySource::Environment);

        unsafe {
            env::remove_var("REPOSITORY");
        }

        let config = Config::from_env().unwrap();
        let expected = if BUILD_REPOSITORY.is_some() {
            RepositorySource::BuildTime
        } else {
            RepositorySource::Unset
        };
        assert_eq!(config.repository_source(), expected);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_utf8_repository_is_kept_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REPOSITORY", OsStr::from_bytes(b"https://example.com/r\xffepo"));
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.repository().as_str(), "https://example.com/r\u{FFFD}epo");
        assert_eq!(config.repository_source(), RepositorySource::EnvironmentLossy);

        unsafe {
            env::remove_var("REPOSITORY");
        }
    }
}
