// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::resolver::{resolve_config, RawVars, ResolvedConfig};
use crate::secrets::SecretsConfigured;

/// Shared, read-only state resolved once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ResolvedConfig>,
    pub secrets: SecretsConfigured,
}

impl AppState {
    pub fn new(config: ResolvedConfig, secrets: SecretsConfigured) -> Self {
        Self {
            config: Arc::new(config),
            secrets,
        }
    }

    /// Resolve configuration and secret flags from one mapping.
    pub fn from_vars(indicator: Option<&str>, raw: &RawVars) -> Self {
        Self::new(resolve_config(indicator, raw), SecretsConfigured::from_vars(raw))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_vars(None, &RawVars::new())
    }
}
