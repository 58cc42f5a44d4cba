use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000004_job::Job;

static IDX_SHIFT_JOB_ID: &str = "idx-shift-job_id";
static FK_SHIFT_JOB_ID: &str = "fk-shift-job_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shift::Table)
                    .if_not_exists()
                    .col(pk_auto(Shift::Id))
                    .col(integer(Shift::JobId))
                    .col(timestamp(Shift::Begin))
                    .col(timestamp(Shift::End))
                    .col(integer(Shift::Number).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHIFT_JOB_ID)
                            .from(Shift::Table, Shift::JobId)
                            .to(Job::Table, Job::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIFT_JOB_ID)
                    .table(Shift::Table)
                    .col(Shift::JobId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHIFT_JOB_ID)
                    .table(Shift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shift::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Shift {
    Table,
    Id,
    JobId,
    Begin,
    End,
    Number,
}
