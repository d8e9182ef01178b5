//! Runtime configuration.
//!
//! Only one knob exists today: how legacy list operations behave. It is read from `BATTERIES_DEPRECATE` when the
//! shared prototype is first built, and can be set explicitly for prototypes built through
//! [`crate::ListModule::new`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the [`DeprecationMode`] of the shared prototype.
pub const DEPRECATION_ENV: &str = "BATTERIES_DEPRECATE";

/// How legacy operations are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeprecationMode {
    /// Available, with a one-time advisory per spelling.
    #[default]
    Warn,
    /// Available, without advisories.
    Silent,
    /// Not available: legacy names resolve to `NoSuchOperation`.
    Remove,
}

impl DeprecationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeprecationMode::Warn => "warn",
            DeprecationMode::Silent => "silent",
            DeprecationMode::Remove => "remove",
        }
    }
}

impl fmt::Display for DeprecationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown deprecation mode '{0}' (expected 'warn', 'silent' or 'remove')")]
pub struct UnknownDeprecationMode(pub String);

impl FromStr for DeprecationMode {
    type Err = UnknownDeprecationMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(DeprecationMode::Warn),
            "silent" => Ok(DeprecationMode::Silent),
            "remove" => Ok(DeprecationMode::Remove),
            _ => Err(UnknownDeprecationMode(s.to_string())),
        }
    }
}

/// Settings a prototype is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub deprecation: DeprecationMode,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deprecation(mut self, mode: DeprecationMode) -> Self {
        self.deprecation = mode;
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DEPRECATION_ENV).ok().as_deref())
    }

    /// Build a configuration from the raw value of [`DEPRECATION_ENV`].
    ///
    /// Unset or empty means the default; an unrecognized value is logged and ignored.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let deprecation = match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => DeprecationMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err: UnknownDeprecationMode| {
                tracing::warn!(env = DEPRECATION_ENV, %err, "ignoring invalid configuration value");
                DeprecationMode::default()
            }),
        };
        Self { deprecation }
    }
}
