// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{http::Uri, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ApiError,
    resolver::{Environment, LogLevel, PublicConfig},
    secrets::SecretsConfigured,
    state::AppState,
};

pub mod health;
pub mod page;
pub mod public_config;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(page::index))
        .route("/api/health", get(health::health))
        .route("/api/config", get(public_config::public_config))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

#[derive(OpenApi)]
#[openapi(
    paths(health::health, public_config::public_config),
    components(
        schemas(
            health::HealthResponse,
            PublicConfig,
            SecretsConfigured,
            Environment,
            LogLevel
        )
    ),
    tags(
        (name = "Health", description = "Service health and secret presence"),
        (name = "Config", description = "Public configuration")
    )
)]
struct ApiDoc;
