/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use backlog_core::init_state;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&state.cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let _guard = if state.cli.report_errors {
        Some(sentry::init(
            "https://5895e5a5d35f4dbebbcc47d5a722c402@reports.wavelens.io/1",
        ))
    } else {
        None
    };

    tracing::info!("Ready to accept connections");

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
