// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tracing subscriber setup.
//!
//! The default filter comes from the resolved environment's log level.
//! `RUST_LOG` still takes precedence when set, whether it comes from the
//! process environment or from the selected profile.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LOG_FORMAT_ENV, RUST_LOG_ENV};
use crate::resolver::{LogLevel, RawVars};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`; anything other than `json` is pretty.
    pub fn from_env_value(value: Option<&str>) -> LogFormat {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Default directives when `RUST_LOG` is unset.
pub fn default_directives(level: LogLevel) -> String {
    format!("{level},tower_http={level}")
}

/// Filter from explicit `RUST_LOG` directives, or the level defaults when
/// they are absent or invalid.
pub fn build_filter(level: LogLevel, directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives(level)))
}

/// Format and filter directives from a merged variable mapping.
pub fn settings_from_vars(vars: &RawVars) -> (LogFormat, Option<&str>) {
    (
        LogFormat::from_env_value(vars.get(LOG_FORMAT_ENV).map(String::as_str)),
        vars.get(RUST_LOG_ENV).map(String::as_str),
    )
}

/// Install the global subscriber configured from `vars`.
pub fn init_from_vars(level: LogLevel, vars: &RawVars) {
    let (format, directives) = settings_from_vars(vars);
    init(level, format, directives);
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(level: LogLevel, format: LogFormat, directives: Option<&str>) {
    let filter = build_filter(level, directives);

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer()).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Pretty);
    }

    #[test]
    fn explicit_directives_override_level() {
        let filter = build_filter(LogLevel::Error, Some("warn"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn missing_or_invalid_directives_use_level() {
        for directives in [None, Some("tower_http=notalevel")] {
            let filter = build_filter(LogLevel::Info, directives).to_string();
            assert!(filter.contains("tower_http=info"), "{filter}");
        }
    }

    #[test]
    fn profile_settings_apply_unless_process_overrides() {
        let process: RawVars = [("LOG_FORMAT".to_string(), "pretty".to_string())]
            .into_iter()
            .collect();
        let profile: RawVars = [
            ("LOG_FORMAT".to_string(), "json".to_string()),
            ("RUST_LOG".to_string(), "warn".to_string()),
        ]
        .into_iter()
        .collect();

        let merged = crate::profile::merge_vars(process, profile.clone());
        assert_eq!(settings_from_vars(&merged), (LogFormat::Pretty, Some("warn")));
        assert_eq!(settings_from_vars(&profile), (LogFormat::Json, Some("warn")));
        assert_eq!(settings_from_vars(&RawVars::new()), (LogFormat::Pretty, None));
    }

    #[test]
    fn directives_follow_level() {
        assert_eq!(default_directives(LogLevel::Debug), "debug,tower_http=debug");
        assert_eq!(default_directives(LogLevel::Error), "error,tower_http=error");
    }
}
