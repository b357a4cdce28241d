/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::Cliams;
use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use backlog_core::database::{get_project_by_id, get_user_by_id};
use backlog_core::input::validate_display_name;
use backlog_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeProjectRequest {
    pub name: String,
    pub description: String,
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<ListResponse>>> {
    // TODO: Implement pagination
    let projects = EProject::find().all(&state.db).await?;

    let projects: ListResponse = projects
        .iter()
        .map(|p| ListItem {
            id: p.id,
            name: p.name.clone(),
        })
        .collect();

    let res = BaseResponse {
        error: false,
        message: projects,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Cliams>,
    Json(body): Json<MakeProjectRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if let Err(e) = validate_display_name(&body.name) {
        return Err(WebError::BadRequest(format!("Invalid project name: {}", e)));
    }

    let existing_project = EProject::find()
        .filter(CProject::Name.eq(body.name.clone()))
        .one(&state.db)
        .await?;

    if existing_project.is_some() {
        return Err(WebError::already_exists("Project Name"));
    }

    let user = get_user_by_id(state.0.clone(), claims.sub)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    let project = AProject {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.clone()),
        description: Set(body.description.clone()),
        created_by: Set(user.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let project = project.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: project.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<String>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    let project_id =
        Uuid::parse_str(&project_id).map_err(|_| WebError::invalid_name("Project Id"))?;

    let project = get_project_by_id(state.0.clone(), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}
