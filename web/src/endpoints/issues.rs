/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::Cliams;
use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use backlog_core::database::{get_project_by_id, get_user_by_id};
use backlog_core::input::validate_required_text;
use backlog_core::issues::{
    create_issue, enrich_issues_with_authors, get_issues_by_project, issue_to_response,
};
use backlog_core::types::*;
use entity::issue::{IssuePriority, IssueState, IssueType};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub async fn get(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> WebResult<Json<BaseResponse<Vec<IssueResponse>>>> {
    let project_id =
        Uuid::parse_str(&project_id).map_err(|_| WebError::invalid_name("Project Id"))?;

    // Filters are checked before any database work
    let issue_type = params
        .get("type")
        .map(|v| v.parse::<IssueType>())
        .transpose()
        .map_err(WebError::BadRequest)?;

    let priority = params
        .get("priority")
        .map(|v| v.parse::<IssuePriority>())
        .transpose()
        .map_err(WebError::BadRequest)?;

    let issue_state = params
        .get("state")
        .map(|v| v.parse::<IssueState>())
        .transpose()
        .map_err(WebError::BadRequest)?;

    let project = get_project_by_id(state.0.clone(), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let issues = get_issues_by_project(
        state.0.clone(),
        &project,
        issue_type,
        priority,
        issue_state,
    )
    .await?;

    let issues = enrich_issues_with_authors(state.0.clone(), issues).await?;

    let res = BaseResponse {
        error: false,
        message: issues,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Cliams>,
    Path(project_id): Path<String>,
    body: Result<Json<MakeIssueRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<IssueResponse>>)> {
    let project_id =
        Uuid::parse_str(&project_id).map_err(|_| WebError::invalid_name("Project Id"))?;

    let Json(body) = body?;

    validate_required_text("Title", &body.title).map_err(WebError::BadRequest)?;
    validate_required_text("Description", &body.description).map_err(WebError::BadRequest)?;

    let project = get_project_by_id(state.0.clone(), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let author = get_user_by_id(state.0.clone(), claims.sub)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    let issue = create_issue(state.0.clone(), &body, &author, &project).await?;

    let res = BaseResponse {
        error: false,
        message: issue_to_response(&issue, &author),
    };

    Ok((StatusCode::CREATED, Json(res)))
}
