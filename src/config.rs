// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Server configuration.
//!
//! Values start from built-in defaults, then `FACTORDOTS_*` environment variables override them;
//! the binary applies command-line flags last.

use std::env;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use tracing::Level;

use crate::input::RenderLimits;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

pub const ENV_HOST: &str = "FACTORDOTS_HOST";
pub const ENV_PORT: &str = "FACTORDOTS_PORT";
pub const ENV_LOG: &str = "FACTORDOTS_LOG";
pub const ENV_SEED: &str = "FACTORDOTS_SEED";
pub const ENV_MAX_COUNT: &str = "FACTORDOTS_MAX_COUNT";
pub const ENV_MAX_NUMBER: &str = "FACTORDOTS_MAX_NUMBER";
pub const ENV_MAX_POINTS: &str = "FACTORDOTS_MAX_POINTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: Level,
    /// Fixed seed for dot colors; `None` draws fresh colors for every page.
    pub seed: Option<u64>,
    pub limits: RenderLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            log_level: Level::INFO,
            seed: None,
            limits: RenderLimits::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
                name: name.to_owned(),
                value: "<non-unicode>".to_owned(),
            }),
        })
    }

    /// Defaults overridden by whatever `lookup` returns for each `FACTORDOTS_*` name.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = Self::default();
        let mut read = |name: &str| -> Result<Option<String>, ConfigError> {
            Ok(lookup(name)?.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()))
        };

        if let Some(host) = read(ENV_HOST)? {
            config.host = host;
        }
        if let Some(raw) = read(ENV_PORT)? {
            config.port = parse_env(ENV_PORT, &raw)?;
        }
        if let Some(raw) = read(ENV_LOG)? {
            config.log_level = parse_env(ENV_LOG, &raw)?;
        }
        if let Some(raw) = read(ENV_SEED)? {
            config.seed = Some(parse_env(ENV_SEED, &raw)?);
        }
        if let Some(raw) = read(ENV_MAX_COUNT)? {
            config.limits.max_count = parse_positive(ENV_MAX_COUNT, &raw)?;
        }
        if let Some(raw) = read(ENV_MAX_NUMBER)? {
            config.limits.max_number = parse_positive(ENV_MAX_NUMBER, &raw)?;
        }
        if let Some(raw) = read(ENV_MAX_POINTS)? {
            config.limits.max_points = parse_positive(ENV_MAX_POINTS, &raw)?;
        }

        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>()
        .map_err(|_| ConfigError::InvalidEnv { name: name.to_owned(), value: raw.to_owned() })
}

fn parse_positive(name: &str, raw: &str) -> Result<u64, ConfigError> {
    match parse_env::<u64>(name, raw)? {
        0 => Err(ConfigError::InvalidEnv { name: name.to_owned(), value: raw.to_owned() }),
        value => Ok(value),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tracing::Level;

    use super::{Config, ConfigError, ENV_LOG, ENV_MAX_COUNT, ENV_MAX_POINTS, ENV_PORT, ENV_SEED};
    use crate::input::RenderLimits;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|name| Ok(vars.get(name).cloned()))
    }

    #[test]
    fn defaults_without_env() {
        let config = from_pairs(&[]).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8050");
        assert_eq!(
            config.limits,
            RenderLimits { max_count: 60, max_number: 100_000, max_points: 250_000 }
        );
    }

    #[test]
    fn env_overrides_defaults() {
        let config = from_pairs(&[
            ("FACTORDOTS_HOST", "0.0.0.0"),
            (ENV_PORT, " 9000 "),
            (ENV_LOG, "debug"),
            (ENV_SEED, "17"),
            (ENV_MAX_COUNT, "12"),
            ("FACTORDOTS_MAX_NUMBER", "999"),
            (ENV_MAX_POINTS, "4000"),
        ])
        .expect("config");
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.seed, Some(17));
        assert_eq!(
            config.limits,
            RenderLimits { max_count: 12, max_number: 999, max_points: 4_000 }
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = from_pairs(&[(ENV_PORT, "   ")]).expect("config");
        assert_eq!(config.port, super::DEFAULT_PORT);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = from_pairs(&[(ENV_PORT, "http")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv { name: ENV_PORT.to_owned(), value: "http".to_owned() }
        );
        assert_eq!(err.to_string(), "invalid env FACTORDOTS_PORT=http");

        from_pairs(&[(ENV_MAX_COUNT, "0")]).unwrap_err();
        from_pairs(&[(ENV_MAX_POINTS, "0")]).unwrap_err();
        from_pairs(&[(ENV_LOG, "loud")]).unwrap_err();
    }
}
