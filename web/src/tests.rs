/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#[cfg(test)]
mod tests {
    use backlog_core::types::*;
    use entity::*;
    use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;
    use tower_http::cors::{AllowOrigin, CorsLayer};

    fn create_mock_cli() -> Cli {
        Cli {
            log_level: "info".to_string(),
            ip: "127.0.0.1".to_string(),
            port: 3000,
            database_url: Some("mock://test".to_string()),
            database_url_file: None,
            jwt_secret_file: "test_jwt".to_string(),
            disable_registration: false,
            report_errors: false,
        }
    }

    fn create_mock_state() -> Arc<ServerState> {
        let cli = create_mock_cli();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        Arc::new(ServerState { db, cli })
    }

    #[test]
    fn test_server_state_configuration() {
        let state = create_mock_state();

        assert!(!state.cli.disable_registration);
        assert!(!state.cli.report_errors);
        assert_eq!(state.cli.ip, "127.0.0.1");
        assert_eq!(state.cli.port, 3000);
    }

    #[test]
    fn test_router_construction() {
        let state = create_mock_state();

        // Router construction wires every route and layer without panicking
        let _router = crate::create_router(state);
    }

    #[test]
    fn test_middleware_configuration() {
        // CORS configuration creation doesn't panic
        let _cors = CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE]);
    }

    #[test]
    fn test_health_endpoint() {
        let response = tokio_test::block_on(crate::endpoints::get_health()).unwrap();

        assert!(!response.0.error);
        assert_eq!(response.0.message, "200 ALIVE");
    }

    #[test]
    fn test_handle_404() {
        use axum::response::IntoResponse;

        let response = tokio_test::block_on(crate::endpoints::handle_404()).into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
    }

    mod auth_tests {
        use crate::endpoints::auth::*;

        #[test]
        fn test_make_login_request_serialization() {
            let request = MakeLoginRequest {
                email: "mario@example.com".to_string(),
                password: "password123".to_string(),
            };

            let json = serde_json::to_string(&request).unwrap();
            assert!(json.contains("mario@example.com"));
            assert!(json.contains("password123"));
        }

        #[test]
        fn test_make_user_request_serialization() {
            let request = MakeUserRequest {
                name: "Mario".to_string(),
                surname: "Rossi".to_string(),
                email: "mario@example.com".to_string(),
                password: "password123".to_string(),
            };

            let json = serde_json::to_string(&request).unwrap();
            assert!(json.contains("Mario"));
            assert!(json.contains("Rossi"));
            assert!(json.contains("mario@example.com"));
        }
    }

    mod project_tests {
        use crate::endpoints::projects::*;

        #[test]
        fn test_make_project_request_serialization() {
            let request = MakeProjectRequest {
                name: "Website Redesign".to_string(),
                description: "Tracks the relaunch work".to_string(),
            };

            let json = serde_json::to_string(&request).unwrap();
            assert!(json.contains("Website Redesign"));
            assert!(json.contains("Tracks the relaunch work"));
        }
    }
}
