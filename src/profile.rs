// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Profiles
//!
//! Each environment has its own profile file next to the binary (or under
//! `ENV_DIR`):
//!
//! ```text
//! .env.development
//! .env.staging
//! .env.production
//! ```
//!
//! The profile is parsed into a plain mapping and merged under the process
//! environment. Nothing here writes to the process environment.

use std::path::{Path, PathBuf};

use crate::resolver::{Environment, RawVars};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("invalid entry in profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// File name of the profile for `environment`.
pub fn profile_file_name(environment: Environment) -> &'static str {
    match environment {
        Environment::Development => ".env.development",
        Environment::Staging => ".env.staging",
        Environment::Production => ".env.production",
    }
}

/// Parse the profile for `environment` from `dir`.
///
/// A missing profile yields an empty mapping.
pub fn load_profile(dir: &Path, environment: Environment) -> Result<RawVars, ProfileError> {
    let path = dir.join(profile_file_name(environment));

    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "No profile file found");
            return Ok(RawVars::new());
        }
        Err(source) => return Err(ProfileError::Read { path, source }),
    };

    let mut vars = RawVars::new();
    for item in iter {
        let (key, value) = item.map_err(|source| ProfileError::Parse {
            path: path.clone(),
            source,
        })?;
        vars.insert(key, value);
    }

    tracing::debug!(
        path = %path.display(),
        count = vars.len(),
        "Loaded environment profile"
    );
    Ok(vars)
}

/// Overlay `process` on top of `profile`. Values already set in the process
/// environment are never overridden.
pub fn merge_vars(process: RawVars, profile: RawVars) -> RawVars {
    let mut merged = profile;
    merged.extend(process);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_names_per_environment() {
        assert_eq!(profile_file_name(Environment::Development), ".env.development");
        assert_eq!(profile_file_name(Environment::Staging), ".env.staging");
        assert_eq!(profile_file_name(Environment::Production), ".env.production");
    }

    #[test]
    fn missing_profile_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let vars = load_profile(dir.path(), Environment::Production).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn loads_selected_profile_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env.staging"),
            "# staging profile\nPUBLIC_API_URL=https://staging.internal\nDATABASE_URL=\"postgres://staging\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(".env.production"),
            "PUBLIC_API_URL=https://prod.internal\n",
        )
        .unwrap();

        let vars = load_profile(dir.path(), Environment::Staging).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["PUBLIC_API_URL"], "https://staging.internal");
        assert_eq!(vars["DATABASE_URL"], "postgres://staging");
    }

    #[test]
    fn malformed_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env.development"), "NOT A VALID LINE\n").unwrap();

        let err = load_profile(dir.path(), Environment::Development).unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }

    #[test]
    fn process_environment_wins() {
        let process: RawVars = [("PUBLIC_API_URL".to_string(), "https://from-process".to_string())]
            .into_iter()
            .collect();
        let profile: RawVars = [
            ("PUBLIC_API_URL".to_string(), "https://from-profile".to_string()),
            ("JWT_SECRET".to_string(), "s3cret".to_string()),
        ]
        .into_iter()
        .collect();

        let merged = merge_vars(process, profile);
        assert_eq!(merged["PUBLIC_API_URL"], "https://from-process");
        assert_eq!(merged["JWT_SECRET"], "s3cret");
    }
}
