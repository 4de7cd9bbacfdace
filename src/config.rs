// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Variables are read from the process
//! environment at startup, merged over the selected `.env.<environment>`
//! profile, and handed to the resolver as an explicit mapping.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `APP_ENV` | Environment indicator (`development`, `staging`, `production`) | `development` |
//! | `PUBLIC_API_URL` | Public API base URL exposed to clients | Per environment |
//! | `PUBLIC_STRIPE_PUBLISHABLE_KEY` | Stripe publishable key | Optional |
//! | `DATABASE_URL` | Database connection string (server-only) | Optional |
//! | `STRIPE_SECRET_KEY` | Stripe secret key (server-only) | Optional |
//! | `JWT_SECRET` | Token signing secret (server-only) | Optional |
//! | `ENV_DIR` | Directory containing `.env.*` profiles | `.` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | Resolved `logLevel` |
//!
//! Every variable except `APP_ENV` and `ENV_DIR` may also be set in the
//! profile; values in the process environment win.

/// Environment variable selecting the configuration profile.
///
/// Unrecognized values fall back to `development`.
pub const APP_ENV_ENV: &str = "APP_ENV";

/// Public API base URL. The only variable the service expects to be set.
pub const PUBLIC_API_URL_ENV: &str = "PUBLIC_API_URL";

/// Stripe publishable key. Safe to expose, passed through as-is.
pub const STRIPE_PUBLISHABLE_KEY_ENV: &str = "PUBLIC_STRIPE_PUBLISHABLE_KEY";

/// Database connection string.
///
/// Server-only. Never serialized into any client-facing response.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Stripe secret key. Server-only, reported by presence only.
pub const STRIPE_SECRET_KEY_ENV: &str = "STRIPE_SECRET_KEY";

/// Token signing secret. Server-only, reported by presence only.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Variables that should be present for a correctly configured deployment.
///
/// Missing entries only produce a warning; resolution still succeeds.
pub const REQUIRED_VARIABLES: &[&str] = &[PUBLIC_API_URL_ENV];

/// Directory holding the `.env.<environment>` profile files.
pub const ENV_DIR_ENV: &str = "ENV_DIR";

/// Default profile directory (the working directory).
pub const DEFAULT_ENV_DIR: &str = ".";

/// Server bind address.
pub const HOST_ENV: &str = "HOST";

/// Server bind port.
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 8080;

/// Log output format, `json` or `pretty`.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log filter directives, overriding the environment's log level.
pub const RUST_LOG_ENV: &str = "RUST_LOG";
