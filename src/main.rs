// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, path::PathBuf, process::ExitCode};

use relational_env_server::{
    api::router,
    config::{
        APP_ENV_ENV, DEFAULT_ENV_DIR, DEFAULT_HOST, DEFAULT_PORT, ENV_DIR_ENV, HOST_ENV, PORT_ENV,
    },
    error::ServerError,
    logging,
    profile::{load_profile, merge_vars, profile_file_name},
    resolver::{check_required_variables, Environment, RawVars},
    state::AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let process_vars: RawVars = env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    let indicator = process_vars.get(APP_ENV_ENV).cloned();

    // Only selects the profile; the resolver reports unrecognized values.
    let environment = indicator
        .as_deref()
        .and_then(Environment::parse)
        .unwrap_or_default();
    let env_dir = process_vars
        .get(ENV_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_DIR));

    let profile = match load_profile(&env_dir, environment) {
        Ok(profile) => profile,
        Err(e) => {
            logging::init_from_vars(environment.defaults().log_level, &process_vars);
            return Err(e.into());
        }
    };
    let profile_len = profile.len();

    let vars = merge_vars(process_vars, profile);
    logging::init_from_vars(environment.defaults().log_level, &vars);
    tracing::debug!(
        profile = profile_file_name(environment),
        dir = %env_dir.display(),
        count = profile_len,
        "Environment profile merged"
    );
    check_required_variables(&vars);

    let state = AppState::from_vars(indicator.as_deref(), &vars);
    tracing::info!(
        environment = %state.config.environment,
        api_url = %state.config.api_url,
        log_level = %state.config.log_level,
        feature_beta = state.config.feature_beta,
        analytics_enabled = state.config.analytics_enabled,
        database_configured = state.config.database_url.is_some(),
        "Configuration resolved"
    );

    let host = vars
        .get(HOST_ENV)
        .cloned()
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port: u16 = vars
        .get(PORT_ENV)
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|_| ServerError::BindAddress(format!("{host}:{port}")))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Relational Env server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
