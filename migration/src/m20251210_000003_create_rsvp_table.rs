use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251210_000001_create_user_table::User, m20251210_000002_create_class_table::Class,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rsvp::Table)
                    .if_not_exists()
                    .col(pk_auto(Rsvp::Id))
                    .col(integer(Rsvp::UserId))
                    .col(integer(Rsvp::ClassId))
                    .col(string_len(Rsvp::Status, 50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rsvp_user_id")
                            .from(Rsvp::Table, Rsvp::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rsvp_class_id")
                            .from(Rsvp::Table, Rsvp::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upserts resolve conflicts against this index
        manager
            .create_index(
                Index::create()
                    .unique()
                    .name("idx_rsvp_user_class_unique")
                    .table(Rsvp::Table)
                    .col(Rsvp::UserId)
                    .col(Rsvp::ClassId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rsvp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rsvp {
    Table,
    Id,
    UserId,
    ClassId,
    Status,
}
