use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000005_shift::Shift, m20261019_000006_helper::Helper};

static IDX_HELPER_SHIFT_SHIFT_ID: &str = "idx-helper_shift-shift_id";
static FK_HELPER_SHIFT_HELPER_ID: &str = "fk-helper_shift-helper_id";
static FK_HELPER_SHIFT_SHIFT_ID: &str = "fk-helper_shift-shift_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelperShift::Table)
                    .if_not_exists()
                    .col(integer(HelperShift::HelperId))
                    .col(integer(HelperShift::ShiftId))
                    .col(timestamp(HelperShift::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(HelperShift::HelperId)
                            .col(HelperShift::ShiftId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HELPER_SHIFT_HELPER_ID)
                            .from(HelperShift::Table, HelperShift::HelperId)
                            .to(Helper::Table, Helper::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_HELPER_SHIFT_SHIFT_ID)
                            .from(HelperShift::Table, HelperShift::ShiftId)
                            .to(Shift::Table, Shift::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HELPER_SHIFT_SHIFT_ID)
                    .table(HelperShift::Table)
                    .col(HelperShift::ShiftId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_HELPER_SHIFT_SHIFT_ID)
                    .table(HelperShift::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HelperShift::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HelperShift {
    Table,
    HelperId,
    ShiftId,
    CreatedAt,
}
