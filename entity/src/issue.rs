/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    #[sea_orm(num_value = 0)]
    Bug,
    #[sea_orm(num_value = 1)]
    Question,
    #[sea_orm(num_value = 2)]
    Feature,
    #[sea_orm(num_value = 3)]
    Documentation,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::Bug => write!(f, "BUG"),
            IssueType::Question => write!(f, "QUESTION"),
            IssueType::Feature => write!(f, "FEATURE"),
            IssueType::Documentation => write!(f, "DOCUMENTATION"),
        }
    }
}

impl FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUG" => Ok(IssueType::Bug),
            "QUESTION" => Ok(IssueType::Question),
            "FEATURE" => Ok(IssueType::Feature),
            "DOCUMENTATION" => Ok(IssueType::Documentation),
            _ => Err(format!("`{s}` is not a valid issue type")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssuePriority {
    #[sea_orm(num_value = 0)]
    Low,
    #[sea_orm(num_value = 1)]
    Medium,
    #[sea_orm(num_value = 2)]
    High,
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssuePriority::Low => write!(f, "LOW"),
            IssuePriority::Medium => write!(f, "MEDIUM"),
            IssuePriority::High => write!(f, "HIGH"),
        }
    }
}

impl FromStr for IssuePriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(IssuePriority::Low),
            "MEDIUM" => Ok(IssuePriority::Medium),
            "HIGH" => Ok(IssuePriority::High),
            _ => Err(format!("`{s}` is not a valid priority")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueState {
    #[sea_orm(num_value = 0)]
    Todo,
    #[sea_orm(num_value = 1)]
    Pending,
    #[sea_orm(num_value = 2)]
    Done,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Todo => write!(f, "TODO"),
            IssueState::Pending => write!(f, "PENDING"),
            IssueState::Done => write!(f, "DONE"),
        }
    }
}

impl FromStr for IssueState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(IssueState::Todo),
            "PENDING" => Ok(IssueState::Pending),
            "DONE" => Ok(IssueState::Done),
            _ => Err(format!("`{s}` is not a valid issue state")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "issue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub project: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub issue_type: IssueType,
    pub priority: IssuePriority,
    pub state: IssueState,
    pub created_by: Uuid,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::Project",
        to = "super::project::Column::Id"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    CreatedBy,
}

impl ActiveModelBehavior for ActiveModel {}
