/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

#[cfg(test)]
mod tests;

use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, middleware};
use backlog_core::types::ServerState;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![Method::GET, Method::POST])
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/projects",
            get(endpoints::projects::get).post(endpoints::projects::post),
        )
        .route(
            "/api/projects/{project}",
            get(endpoints::projects::get_project),
        )
        .route(
            "/api/projects/{project}/issues",
            get(endpoints::issues::get).post(endpoints::issues::post),
        )
        .route("/api/user", get(endpoints::user::get))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/auth/register", post(endpoints::auth::post_register))
        .route("/api/auth/login", post(endpoints::auth::post_login))
        .route("/api/auth/logout", post(endpoints::auth::post_logout))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip.clone(), state.cli.port.clone());
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
