/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Issue::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Issue::Project).uuid().not_null())
                    .col(ColumnDef::new(Issue::Title).string().not_null())
                    .col(ColumnDef::new(Issue::Description).text().not_null())
                    .col(ColumnDef::new(Issue::IssueType).integer().not_null())
                    .col(ColumnDef::new(Issue::Priority).integer().not_null())
                    .col(ColumnDef::new(Issue::State).integer().not_null())
                    .col(ColumnDef::new(Issue::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Issue::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-issue-project")
                            .from(Issue::Table, Issue::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-issue-created_by")
                            .from(Issue::Table, Issue::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Issue {
    Table,
    Id,
    Project,
    Title,
    Description,
    IssueType,
    Priority,
    State,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
