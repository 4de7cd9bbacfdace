// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::resolver::Environment;
use crate::secrets::SecretsConfigured;
use crate::state::AppState;

/// Health check response.
///
/// Reports whether secrets are configured, never their values.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving.
    pub status: String,
    /// Active environment.
    pub environment: Environment,
    /// Public API base URL.
    pub api_url: String,
    /// Response time, ISO-8601 UTC.
    pub timestamp: String,
    /// Presence of server-only secrets.
    pub secrets_configured: SecretsConfigured,
}

/// Health check endpoint handler.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: state.config.environment,
        api_url: state.config.api_url.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        secrets_configured: state.secrets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::RawVars;

    fn production_state() -> AppState {
        let raw: RawVars = [
            ("PUBLIC_API_URL", "https://api.internal"),
            ("DATABASE_URL", "postgres://admin:pw@db/prod"),
            ("STRIPE_SECRET_KEY", "sk_live_abc123"),
            ("JWT_SECRET", "jwt-signing-secret"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        AppState::from_vars(Some("production"), &raw)
    }

    #[tokio::test]
    async fn health_reports_environment_and_flags() {
        let Json(body) = health(State(production_state())).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.environment, Environment::Production);
        assert_eq!(body.api_url, "https://api.internal");
        assert!(body.secrets_configured.stripe);
        assert!(body.secrets_configured.jwt);
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
        assert!(body.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn health_json_never_contains_secret_values() {
        let Json(body) = health(State(production_state())).await;
        let json = serde_json::to_value(&body).unwrap();

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        assert_eq!(json["secretsConfigured"]["stripe"], true);
        assert_eq!(json["secretsConfigured"]["jwt"], true);

        let rendered = json.to_string();
        for secret in ["postgres://admin", "sk_live_abc123", "jwt-signing-secret"] {
            assert!(!rendered.contains(secret), "leaked {secret}");
        }
    }

    #[tokio::test]
    async fn unconfigured_secrets_are_false() {
        let Json(body) = health(State(AppState::default())).await;
        assert_eq!(body.environment, Environment::Development);
        assert_eq!(body.api_url, "http://localhost:3000/api");
        assert!(!body.secrets_configured.stripe);
        assert!(!body.secrets_configured.jwt);
    }
}
