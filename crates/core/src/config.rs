//! Process-wide configuration for the panic facility.
//!
//! A [`PanicConfig`] can be built in code, parsed from TOML, or read from the
//! environment, and then installed globally:
//!
//! ```
//! use railway_core::config::PanicConfig;
//!
//! let config = PanicConfig::from_toml_str("capture_backtrace = true")?;
//! assert!(config.capture_backtrace());
//! assert!(config.log_events());
//! # Ok::<(), railway_core::Error>(())
//! ```
//!
//! Unknown keys are rejected, so a typo in a config file surfaces as an
//! error instead of being silently ignored.

use std::path::Path;
use std::sync::{PoisonError, RwLock};

use serde::Deserialize;

use crate::error::{ConfigResult, Error};

/// Environment variable toggling backtrace capture.
pub const ENV_BACKTRACE: &str = "RAILWAY_PANIC_BACKTRACE";

/// Environment variable toggling the `tracing` event emitted on panic.
pub const ENV_LOG: &str = "RAILWAY_PANIC_LOG";

static CURRENT: RwLock<PanicConfig> = RwLock::new(PanicConfig::DEFAULT);

// =============================================================================
// PanicConfig
// =============================================================================

/// How [`raise`](crate::panic::raise) decorates and reports a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanicConfig {
    capture_backtrace: bool,
    log_events: bool,
}

impl Default for PanicConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PanicConfig {
    /// No backtraces, events logged.
    pub const DEFAULT: Self = Self {
        capture_backtrace: false,
        log_events: true,
    };

    pub const fn builder() -> PanicConfigBuilder {
        PanicConfigBuilder {
            config: Self::DEFAULT,
        }
    }

    /// Whether a backtrace is captured and appended to the panic message.
    pub const fn capture_backtrace(&self) -> bool {
        self.capture_backtrace
    }

    /// Whether a `tracing` error event is emitted before unwinding.
    pub const fn log_events(&self) -> bool {
        self.log_events
    }

    /// Parse a configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] for malformed TOML, values of the
    /// wrong type, or unknown keys.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|e| Error::config_parse_failed(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigReadFailed`] when the file cannot be read, or
    /// [`Error::ConfigParseFailed`] when its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))
            .and_then(|text| Self::from_toml_str(&text))
    }

    /// Read overrides from `RAILWAY_PANIC_BACKTRACE` and `RAILWAY_PANIC_LOG`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnvValue`] when a variable is set to something
    /// other than a recognised flag.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), but reading variables via `lookup`.
    ///
    /// Flags accept `1`/`0`, `true`/`false`, `yes`/`no` and `on`/`off`,
    /// case-insensitively. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnvValue`] for an unrecognised flag.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str, default: bool| {
            lookup(var).map_or(Ok(default), |value| parse_flag(var, &value))
        };

        Ok(Self {
            capture_backtrace: read(ENV_BACKTRACE, Self::DEFAULT.capture_backtrace)?,
            log_events: read(ENV_LOG, Self::DEFAULT.log_events)?,
        })
    }

    /// Make this the configuration every subsequent panic uses.
    pub fn install(self) {
        *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = self;
    }

    /// The installed configuration.
    pub fn current() -> Self {
        *CURRENT.read().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_flag(var: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_env_value(var, value)),
    }
}

// =============================================================================
// PanicConfigBuilder
// =============================================================================

/// Builder for [`PanicConfig`], starting from [`PanicConfig::DEFAULT`].
#[derive(Debug, Clone, Copy)]
pub struct PanicConfigBuilder {
    config: PanicConfig,
}

impl PanicConfigBuilder {
    #[must_use]
    pub const fn capture_backtrace(mut self, enabled: bool) -> Self {
        self.config.capture_backtrace = enabled;
        self
    }

    #[must_use]
    pub const fn log_events(mut self, enabled: bool) -> Self {
        self.config.log_events = enabled;
        self
    }

    pub const fn build(self) -> PanicConfig {
        self.config
    }
}
