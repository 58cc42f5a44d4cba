use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000002_event::Event;

static IDX_JOB_EVENT_ID: &str = "idx-job-event_id";
static FK_JOB_EVENT_ID: &str = "fk-job-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(integer(Job::EventId))
                    .col(string_len(Job::Name, 200))
                    .col(text(Job::Description))
                    .col(integer(Job::Position).default(0))
                    .col(timestamp(Job::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_JOB_EVENT_ID)
                            .from(Job::Table, Job::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_EVENT_ID)
                    .table(Job::Table)
                    .col(Job::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_JOB_EVENT_ID).table(Job::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    EventId,
    Name,
    Description,
    Position,
    CreatedAt,
}
