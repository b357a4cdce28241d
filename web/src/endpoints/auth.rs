/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::{encode_jwt, update_last_login};
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use backlog_core::consts::*;
use backlog_core::input::{validate_display_name, validate_password};
use backlog_core::types::*;
use email_address::EmailAddress;
use entity::user::UserRole;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeUserRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if let Err(e) = validate_display_name(&body.name) {
        return Err(WebError::BadRequest(format!("Invalid name: {}", e)));
    }

    if let Err(e) = validate_display_name(&body.surname) {
        return Err(WebError::BadRequest(format!("Invalid surname: {}", e)));
    }

    if !EmailAddress::is_valid(body.email.clone().as_str()) {
        return Err(WebError::invalid_email());
    }

    if let Err(e) = validate_password(&body.password) {
        return Err(WebError::invalid_password(e));
    }

    let user = EUser::find()
        .filter(CUser::Email.eq(body.email.clone()))
        .one(&state.db)
        .await?;

    if user.is_some() {
        return Err(WebError::already_exists("User"));
    };

    let user = AUser {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.clone()),
        surname: Set(body.surname.clone()),
        email: Set(body.email.clone()),
        password: Set(generate_hash(body.password.clone())),
        role: Set(UserRole::Member),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: user.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeLoginRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let user = EUser::find()
        .filter(CUser::Email.eq(body.email.clone()))
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(body.password, &user.password)
        .map_err(|_| WebError::invalid_credentials())?;

    let token =
        encode_jwt(state.clone(), &user).map_err(|_| WebError::failed_to_generate_token())?;

    update_last_login(state, user)
        .await
        .map_err(|_| WebError::failed_to_update_user())?;

    let res = BaseResponse {
        error: false,
        message: token,
    };

    Ok(Json(res))
}

pub async fn post_logout(
    _state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<String>>> {
    // TODO: invalidate token if needed
    let res = BaseResponse {
        error: false,
        message: "Logout Successfully".to_string(),
    };

    Ok(Json(res))
}
