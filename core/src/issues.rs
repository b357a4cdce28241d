/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use entity::issue::{IssuePriority, IssueState, IssueType};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::types::*;

pub async fn get_issues_by_project(
    state: Arc<ServerState>,
    project: &MProject,
    issue_type: Option<IssueType>,
    priority: Option<IssuePriority>,
    issue_state: Option<IssueState>,
) -> Result<Vec<MIssue>> {
    let mut condition = Condition::all().add(CIssue::Project.eq(project.id));

    if let Some(issue_type) = issue_type {
        condition = condition.add(CIssue::IssueType.eq(issue_type));
    }

    if let Some(priority) = priority {
        condition = condition.add(CIssue::Priority.eq(priority));
    }

    if let Some(issue_state) = issue_state {
        condition = condition.add(CIssue::State.eq(issue_state));
    }

    Ok(EIssue::find()
        .filter(condition)
        .all(&state.db)
        .await
        .context("Failed to query issues")?)
}

pub async fn enrich_issues_with_authors(
    state: Arc<ServerState>,
    issues: Vec<MIssue>,
) -> Result<Vec<IssueResponse>> {
    if issues.is_empty() {
        return Ok(Vec::new());
    }

    let mut author_ids: Vec<Uuid> = issues.iter().map(|i| i.created_by).collect();
    author_ids.sort_unstable();
    author_ids.dedup();

    let authors: HashMap<Uuid, MUser> = EUser::find()
        .filter(CUser::Id.is_in(author_ids))
        .all(&state.db)
        .await
        .context("Failed to query issue authors")?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    issues
        .iter()
        .map(|issue| {
            let author = authors.get(&issue.created_by).ok_or_else(|| {
                tracing::error!(
                    "Author {} not found for issue {}",
                    issue.created_by,
                    issue.id
                );
                anyhow::anyhow!("Issue author data inconsistency")
            })?;

            Ok(issue_to_response(issue, author))
        })
        .collect()
}

pub async fn create_issue(
    state: Arc<ServerState>,
    request: &MakeIssueRequest,
    author: &MUser,
    project: &MProject,
) -> Result<MIssue> {
    let issue = AIssue {
        id: Set(Uuid::new_v4()),
        project: Set(project.id),
        title: Set(request.title.clone()),
        description: Set(request.description.clone()),
        issue_type: Set(request.issue_type.clone()),
        priority: Set(request.priority.clone()),
        state: Set(IssueState::Todo),
        created_by: Set(author.id),
        created_at: Set(Utc::now().naive_utc()),
    };

    Ok(issue
        .insert(&state.db)
        .await
        .context("Failed to create issue")?)
}

pub fn issue_to_response(issue: &MIssue, author: &MUser) -> IssueResponse {
    IssueResponse {
        id: issue.id,
        title: issue.title.clone(),
        description: issue.description.clone(),
        issue_type: issue.issue_type.clone(),
        priority: issue.priority.clone(),
        state: issue.state.clone(),
        author_name: author.name.clone(),
        author_surname: author.surname.clone(),
        author_email: author.email.clone(),
        created_at: issue.created_at,
    }
}
