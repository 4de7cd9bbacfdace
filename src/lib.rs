// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Env Server - Multi-Environment Configuration Service
//!
//! Resolves environment-specific configuration (development, staging,
//! production) once at startup and serves the public subset over HTTP.
//! Server-only secrets are reported by presence, never by value.
//!
//! ## Modules
//!
//! - `resolver` - Environment selection and configuration resolution
//! - `profile` - `.env.<environment>` profile loading
//! - `secrets` - Presence flags for server-only secrets
//! - `api` - HTTP handlers (Axum)
//! - `logging` - Tracing subscriber setup

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod profile;
pub mod resolver;
pub mod secrets;
pub mod state;
