// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Presence flags for server-only secrets.
//!
//! Only booleans leave this module. The secret values themselves are never
//! copied out of the raw variable mapping.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{JWT_SECRET_ENV, STRIPE_SECRET_KEY_ENV};
use crate::resolver::{non_empty, RawVars};

/// Which server-only secrets are configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SecretsConfigured {
    /// `STRIPE_SECRET_KEY` is set.
    pub stripe: bool,
    /// `JWT_SECRET` is set.
    pub jwt: bool,
}

impl SecretsConfigured {
    pub fn from_vars(raw: &RawVars) -> Self {
        Self {
            stripe: non_empty(raw, STRIPE_SECRET_KEY_ENV).is_some(),
            jwt: non_empty(raw, JWT_SECRET_ENV).is_some(),
        }
    }
}
