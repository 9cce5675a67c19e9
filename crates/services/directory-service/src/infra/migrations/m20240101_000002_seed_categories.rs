//! Migration: Seed the built-in categories and the work subcategories.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_directory_tables::{Categories, Subcategories};

const CATEGORIES: [&str; 3] = ["work", "private", "other"];
const WORK_SUBCATEGORIES: [&str; 3] = ["boss", "client", "colleague"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut categories = Query::insert();
        categories
            .into_table(Categories::Table)
            .columns([Categories::Name]);
        for name in CATEGORIES {
            categories
                .values([name.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }
        manager.exec_stmt(categories).await?;

        // Subcategories reference "work" by its generated id
        for name in WORK_SUBCATEGORIES {
            let select = Query::select()
                .expr(Expr::val(name))
                .column(Categories::Id)
                .from(Categories::Table)
                .and_where(Expr::col(Categories::Name).eq("work"))
                .to_owned();

            let insert = Query::insert()
                .into_table(Subcategories::Table)
                .columns([Subcategories::Name, Subcategories::CategoryId])
                .select_from(select)
                .map_err(|e| DbErr::Migration(e.to_string()))?
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Subcategories::Table)
                    .and_where(Expr::col(Subcategories::Name).is_in(WORK_SUBCATEGORIES))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Categories::Table)
                    .and_where(Expr::col(Categories::Name).is_in(CATEGORIES))
                    .to_owned(),
            )
            .await
    }
}
