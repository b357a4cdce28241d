/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use backlog_core::types::*;
use entity::*;
use entity::issue::{IssuePriority, IssueState, IssueType};
use entity::user::UserRole;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

pub fn create_mock_cli() -> Cli {
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

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    Arc::new(ServerState { db, cli })
}

pub fn state_with_db(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
    })
}

pub fn fake_time() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn fake_user(name: &str, surname: &str, email: &str, role: UserRole) -> MUser {
    MUser {
        id: Uuid::new_v4(),
        name: name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        password: "hashed".to_string(),
        role,
        last_login_at: fake_time(),
        created_at: fake_time(),
    }
}

pub fn fake_project(name: &str, created_by: Uuid) -> MProject {
    MProject {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: "tracked work".to_string(),
        created_by,
        created_at: fake_time(),
    }
}

pub fn fake_issue(project: &MProject, title: &str, author: &MUser) -> MIssue {
    MIssue {
        id: Uuid::new_v4(),
        project: project.id,
        title: title.to_string(),
        description: "something broke".to_string(),
        issue_type: IssueType::Bug,
        priority: IssuePriority::Low,
        state: IssueState::Todo,
        created_by: author.id,
        created_at: fake_time(),
    }
}
