//! Process-wide settings, read once at startup.
use std::{env, num::ParseIntError};

use thiserror::Error;

/// Environment variable that overrides the number of guesses allowed per round.
pub const ATTEMPTS_VAR: &str = "ATTEMPS";

/// Environment variable that, when non-empty, prints the ship position at the start of
/// each round.
pub const DEBUG_VAR: &str = "DEBUG";

/// Guesses allowed per round when nothing overrides it.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Error raised when the configuration can't be built.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The attempts override was not a whole number.
    #[error("invalid {var} value {value:?}: expected a non-negative whole number")]
    InvalidAttempts {
        /// Where the value came from.
        var: &'static str,
        /// The rejected value.
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings for a game session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    /// Guesses allowed per round.
    max_attempts: u32,

    /// Whether to print the ship position when a round starts.
    debug: bool,
}

impl Config {
    /// Construct a [`Config`] with explicit values.
    pub fn new(max_attempts: u32, debug: bool) -> Self {
        Self {
            max_attempts,
            debug,
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration using `lookup` to fetch variables by name. A variable
    /// that is missing or empty counts as unset.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let max_attempts = match var(ATTEMPTS_VAR) {
            Some(value) => parse_attempts(ATTEMPTS_VAR, &value)?,
            None => DEFAULT_MAX_ATTEMPTS,
        };
        let debug = var(DEBUG_VAR).is_some();
        Ok(Self::new(max_attempts, debug))
    }

    /// Replace the number of guesses allowed per round.
    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Replace the debug setting.
    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// Guesses allowed per round.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether the ship position is printed at the start of each round.
    pub fn debug(&self) -> bool {
        self.debug
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, false)
    }
}

/// Parse an attempts value from `var`. Surrounding whitespace is ignored.
pub fn parse_attempts(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidAttempts {
            var,
            value: value.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), Ok(Config::default()));
        assert_eq!(Config::default().max_attempts(), 10);
        assert!(!Config::default().debug());
    }

    #[test]
    fn attempts_override() {
        assert_eq!(config(&[("ATTEMPS", "3")]).unwrap().max_attempts(), 3);
        assert_eq!(config(&[("ATTEMPS", " 25\n")]).unwrap().max_attempts(), 25);
    }

    #[test]
    fn correctly_spelled_name_is_ignored() {
        assert_eq!(config(&[("ATTEMPTS", "3")]).unwrap().max_attempts(), 10);
    }

    #[test]
    fn empty_attempts_is_unset() {
        assert_eq!(config(&[("ATTEMPS", "")]).unwrap().max_attempts(), 10);
    }

    #[test]
    fn non_numeric_attempts_is_rejected() {
        for bad in &["ten", "-1", "3.5", "0x10"] {
            match config(&[("ATTEMPS", *bad)]) {
                Err(ConfigError::InvalidAttempts { var, value, .. }) => {
                    assert_eq!(var, "ATTEMPS");
                    assert_eq!(value, *bad);
                }
                other => panic!("expected {:?} to be rejected, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn debug_is_any_non_empty_value() {
        assert!(config(&[("DEBUG", "1")]).unwrap().debug());
        assert!(config(&[("DEBUG", "yes")]).unwrap().debug());
        assert!(!config(&[("DEBUG", "")]).unwrap().debug());
    }

    #[test]
    fn builders_replace_fields() {
        let config = Config::default().with_max_attempts(2).with_debug(true);
        assert_eq!(config, Config::new(2, true));
    }
}
