// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Configuration Resolver
//!
//! Maps an environment indicator and a raw variable mapping to a
//! [`ResolvedConfig`]. Resolution never fails: unknown indicators fall back
//! to `development` and unset values fall back to per-environment defaults.
//!
//! ## Defaults
//!
//! | Environment | `apiUrl` default | `logLevel` | `featureBeta` | `analyticsEnabled` |
//! |-------------|------------------|------------|---------------|--------------------|
//! | development | `http://localhost:3000/api` | debug | true | false |
//! | staging | `https://staging-api.example.com` | info | true | true |
//! | production | `https://api.example.com` | error | false | true |
//!
//! ## Public vs Server-only
//!
//! [`ResolvedConfig`] carries server-only values (`database_url`) and does
//! not implement `Serialize`. Anything sent to a client goes through
//! [`PublicConfig`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{
    DATABASE_URL_ENV, PUBLIC_API_URL_ENV, REQUIRED_VARIABLES, STRIPE_PUBLISHABLE_KEY_ENV,
};

/// Raw variable mapping supplied by the caller. Absent keys are unset values.
pub type RawVars = HashMap<String, String>;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    /// Parse an exact environment name.
    pub fn parse(s: &str) -> Option<Environment> {
        match s {
            "development" => Some(Environment::Development),
            "staging" => Some(Environment::Staging),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }

    /// Normalize an indicator, falling back to `Development`.
    ///
    /// A non-empty value that is not recognized is logged as a warning.
    pub fn from_indicator(indicator: Option<&str>) -> Environment {
        match indicator {
            None | Some("") => Environment::Development,
            Some(value) => Environment::parse(value).unwrap_or_else(|| {
                tracing::warn!(
                    indicator = value,
                    "Unrecognized environment, falling back to development"
                );
                Environment::Development
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Fixed per-environment values.
    pub fn defaults(&self) -> EnvironmentDefaults {
        match self {
            Environment::Development => EnvironmentDefaults {
                api_url: "http://localhost:3000/api",
                log_level: LogLevel::Debug,
                feature_beta: true,
                analytics_enabled: false,
            },
            Environment::Staging => EnvironmentDefaults {
                api_url: "https://staging-api.example.com",
                log_level: LogLevel::Info,
                feature_beta: true,
                analytics_enabled: true,
            },
            Environment::Production => EnvironmentDefaults {
                api_url: "https://api.example.com",
                log_level: LogLevel::Error,
                feature_beta: false,
                analytics_enabled: true,
            },
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log verbosity selected by the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the defaults table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentDefaults {
    pub api_url: &'static str,
    pub log_level: LogLevel,
    pub feature_beta: bool,
    pub analytics_enabled: bool,
}

/// Fully resolved configuration. Server-side only.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_url: String,
    pub environment: Environment,
    pub log_level: LogLevel,
    pub database_url: Option<String>,
    pub stripe_publishable_key: Option<String>,
    pub feature_beta: bool,
    pub analytics_enabled: bool,
}

impl ResolvedConfig {
    /// Client-safe subset of this configuration.
    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            api_url: self.api_url.clone(),
            environment: self.environment,
            log_level: self.log_level,
            analytics_enabled: self.analytics_enabled,
        }
    }
}

// Keeps the connection string out of logs.
impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_url", &self.api_url)
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "<redacted>"),
            )
            .field("stripe_publishable_key", &self.stripe_publishable_key)
            .field("feature_beta", &self.feature_beta)
            .field("analytics_enabled", &self.analytics_enabled)
            .finish()
    }
}

/// Configuration values safe to hand to client-facing code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    /// Public API base URL.
    pub api_url: String,
    /// Active environment.
    pub environment: Environment,
    /// Log verbosity for this environment.
    pub log_level: LogLevel,
    /// Whether analytics collection is on.
    pub analytics_enabled: bool,
}

/// Look up a variable, treating an empty value as unset.
pub(crate) fn non_empty<'a>(raw: &'a RawVars, key: &str) -> Option<&'a str> {
    raw.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Resolve the configuration for `indicator` from `raw`.
pub fn resolve_config(indicator: Option<&str>, raw: &RawVars) -> ResolvedConfig {
    let environment = Environment::from_indicator(indicator);
    let defaults = environment.defaults();

    ResolvedConfig {
        api_url: non_empty(raw, PUBLIC_API_URL_ENV)
            .unwrap_or(defaults.api_url)
            .to_string(),
        environment,
        log_level: defaults.log_level,
        database_url: raw.get(DATABASE_URL_ENV).cloned(),
        stripe_publishable_key: raw.get(STRIPE_PUBLISHABLE_KEY_ENV).cloned(),
        feature_beta: defaults.feature_beta,
        analytics_enabled: defaults.analytics_enabled,
    }
}

/// Names from [`REQUIRED_VARIABLES`] that are unset or empty, in order.
///
/// Logs a warning when anything is missing. Advisory only.
pub fn check_required_variables(raw: &RawVars) -> Vec<&'static str> {
    let missing: Vec<&'static str> = REQUIRED_VARIABLES
        .iter()
        .copied()
        .filter(|key| non_empty(raw, key).is_none())
        .collect();

    if !missing.is_empty() {
        tracing::warn!("Missing environment variables: {}", missing.join(", "));
    }

    missing
}
