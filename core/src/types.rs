/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "Backlog", display_name = "Backlog", bin_name = "backlog-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "BACKLOG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "BACKLOG_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "BACKLOG_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "BACKLOG_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "BACKLOG_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "BACKLOG_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "BACKLOG_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "BACKLOG_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub name: String,
}

pub type ListResponse = Vec<ListItem>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeIssueRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: issue::IssueType,
    pub priority: issue::IssuePriority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub issue_type: issue::IssueType,
    pub priority: issue::IssuePriority,
    pub state: issue::IssueState,
    pub author_name: String,
    pub author_surname: String,
    pub author_email: String,
    pub created_at: chrono::NaiveDateTime,
}

pub type EIssue = issue::Entity;
pub type EProject = project::Entity;
pub type EUser = user::Entity;

pub type MIssue = issue::Model;
pub type MProject = project::Model;
pub type MUser = user::Model;

pub type AIssue = issue::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CIssue = issue::Column;
pub type CProject = project::Column;
pub type CUser = user::Column;
