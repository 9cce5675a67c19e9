//! Migration: Create categories, subcategories and contacts tables.
//!
//! Tables carry no foreign keys; references are checked by the services.
//! Only contact email and phone number are unique at the store level.

use sea_orm_migration::prelude::*;

const IDX_CONTACTS_EMAIL: &str = "idx_contacts_email_unique";
const IDX_CONTACTS_PHONE: &str = "idx_contacts_phone_number_unique";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string_len(50).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subcategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subcategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subcategories::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Subcategories::CategoryId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contacts::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Contacts::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Contacts::Email).string_len(50).not_null())
                    .col(ColumnDef::new(Contacts::Password).string_len(50).not_null())
                    .col(ColumnDef::new(Contacts::PhoneNumber).string_len(50).not_null())
                    .col(ColumnDef::new(Contacts::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Contacts::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Contacts::SubcategoryId).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTACTS_EMAIL)
                    .table(Contacts::Table)
                    .col(Contacts::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTACTS_PHONE)
                    .table(Contacts::Table)
                    .col(Contacts::PhoneNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subcategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum Categories {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
pub(crate) enum Subcategories {
    Table,
    Id,
    Name,
    CategoryId,
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    PhoneNumber,
    DateOfBirth,
    CategoryId,
    SubcategoryId,
}
