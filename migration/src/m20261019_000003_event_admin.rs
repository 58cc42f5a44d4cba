use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_app_user::AppUser, m20261019_000002_event::Event};

static IDX_EVENT_ADMIN_USER_ID: &str = "idx-event_admin-user_id";
static FK_EVENT_ADMIN_EVENT_ID: &str = "fk-event_admin-event_id";
static FK_EVENT_ADMIN_USER_ID: &str = "fk-event_admin-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventAdmin::Table)
                    .if_not_exists()
                    .col(integer(EventAdmin::EventId))
                    .col(integer(EventAdmin::UserId))
                    .primary_key(
                        Index::create()
                            .col(EventAdmin::EventId)
                            .col(EventAdmin::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_ADMIN_EVENT_ID)
                            .from(EventAdmin::Table, EventAdmin::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_ADMIN_USER_ID)
                            .from(EventAdmin::Table, EventAdmin::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_ADMIN_USER_ID)
                    .table(EventAdmin::Table)
                    .col(EventAdmin::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_ADMIN_USER_ID)
                    .table(EventAdmin::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventAdmin::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EventAdmin {
    Table,
    EventId,
    UserId,
}
