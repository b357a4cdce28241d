/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::Cliams;
use crate::error::{WebError, WebResult};
use axum::extract::State;
use axum::{Extension, Json};
use backlog_core::database::get_user_by_id;
use backlog_core::types::*;
use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct UserInfoResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: UserRole,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(claims): Extension<Cliams>,
) -> WebResult<Json<BaseResponse<UserInfoResponse>>> {
    let user = get_user_by_id(state.0.clone(), claims.sub)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    let user_info = UserInfoResponse {
        id: user.id.to_string(),
        name: user.name.clone(),
        surname: user.surname.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
    };

    let res = BaseResponse {
        error: false,
        message: user_info,
    };

    Ok(Json(res))
}
