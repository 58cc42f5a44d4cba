use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000002_event::Event;

static IDX_HELPER_EVENT_ID: &str = "idx-helper-event_id";
static FK_HELPER_EVENT_ID: &str = "fk-helper-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Helper::Table)
                    .if_not_exists()
                    .col(pk_auto(Helper::Id))
                    .col(integer(Helper::EventId))
                    .col(string_len(Helper::Prename, 200))
                    .col(string_len(Helper::Surname, 200))
                    .col(string(Helper::Email))
                    .col(string(Helper::Phone))
                    .col(text(Helper::Comment))
                    .col(timestamp(Helper::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HELPER_EVENT_ID)
                            .from(Helper::Table, Helper::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HELPER_EVENT_ID)
                    .table(Helper::Table)
                    .col(Helper::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HELPER_EVENT_ID)
                    .table(Helper::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Helper::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Helper {
    Table,
    Id,
    EventId,
    Prename,
    Surname,
    Email,
    Phone,
    Comment,
    CreatedAt,
}
