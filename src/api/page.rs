// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Landing page showing the public configuration of the running instance.

use axum::{extract::State, response::Html};

use crate::{resolver::PublicConfig, state::AppState};

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the page body. Takes the public projection only.
pub fn render(config: &PublicConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Multi-Environment Build Demo</title></head>
<body style="padding: 2rem; font-family: Arial, sans-serif">
<main>
<h1>Multi-Environment Build Demo</h1>
<section>
<h2>Environment Configuration</h2>
<p><strong>Environment:</strong> <span>{environment}</span></p>
<p><strong>API URL:</strong> {api_url}</p>
<p><strong>Log Level:</strong> {log_level}</p>
<p><strong>Analytics Enabled:</strong> {analytics}</p>
</section>
<section>
<h2>Profiles</h2>
<ul>
<li><code>.env.development</code></li>
<li><code>.env.staging</code></li>
<li><code>.env.production</code></li>
</ul>
<p>Select one with <code>APP_ENV</code>. Secrets stay on the server; see <a href="/api/health">/api/health</a>.</p>
</section>
</main>
</body>
</html>
"#,
        environment = config.environment,
        api_url = escape_html(&config.api_url),
        log_level = config.log_level,
        analytics = if config.analytics_enabled { "Yes" } else { "No" },
    )
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render(&state.config.public()))
}
