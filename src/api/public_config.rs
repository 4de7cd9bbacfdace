// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{resolver::PublicConfig, state::AppState};

/// Client-safe configuration for the active environment.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "Config",
    responses((status = 200, body = PublicConfig))
)]
pub async fn public_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(state.config.public())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Environment, LogLevel, RawVars};

    #[tokio::test]
    async fn returns_public_projection() {
        let mut raw = RawVars::new();
        raw.insert("DATABASE_URL".into(), "postgres://hidden".into());
        let state = AppState::from_vars(Some("staging"), &raw);

        let Json(config) = public_config(State(state)).await;

        assert_eq!(
            config,
            PublicConfig {
                api_url: "https://staging-api.example.com".into(),
                environment: Environment::Staging,
                log_level: LogLevel::Info,
                analytics_enabled: true,
            }
        );
    }
}
