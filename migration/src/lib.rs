/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20251103_101500_create_table_user;
mod m20251103_102200_create_table_project;
mod m20251103_103000_create_table_issue;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251103_101500_create_table_user::Migration),
            Box::new(m20251103_102200_create_table_project::Migration),
            Box::new(m20251103_103000_create_table_issue::Migration),
        ]
    }
}
