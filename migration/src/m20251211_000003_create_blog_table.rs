use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(pk_auto(Blog::Id))
                    .col(string(Blog::Title))
                    .col(string(Blog::Description))
                    .col(text(Blog::DraftText))
                    .col(string_uniq(Blog::Slug))
                    .col(string_null(Blog::ImgUrl))
                    .col(text(Blog::Tags))
                    .col(string(Blog::Status))
                    .col(integer(Blog::AuthorId))
                    .col(timestamp_with_time_zone(Blog::CreatedAt))
                    .col(timestamp_with_time_zone(Blog::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_author_id")
                            .from(Blog::Table, Blog::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Blog {
    Table,
    Id,
    Title,
    Description,
    DraftText,
    Slug,
    ImgUrl,
    Tags,
    Status,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
