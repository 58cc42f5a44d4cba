use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_app_user::AppUser, m20261019_000008_agreement::Agreement};

static IDX_USER_AGREEMENT_USER_AGREEMENT: &str = "idx-user_agreement-user_id-agreement_id";
static FK_USER_AGREEMENT_USER_ID: &str = "fk-user_agreement-user_id";
static FK_USER_AGREEMENT_AGREEMENT_ID: &str = "fk-user_agreement-agreement_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAgreement::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAgreement::Id))
                    .col(integer(UserAgreement::UserId))
                    .col(integer(UserAgreement::AgreementId))
                    .col(timestamp_null(UserAgreement::Agreed))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_AGREEMENT_USER_ID)
                            .from(UserAgreement::Table, UserAgreement::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_AGREEMENT_AGREEMENT_ID)
                            .from(UserAgreement::Table, UserAgreement::AgreementId)
                            .to(Agreement::Table, Agreement::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_AGREEMENT_USER_AGREEMENT)
                    .table(UserAgreement::Table)
                    .col(UserAgreement::UserId)
                    .col(UserAgreement::AgreementId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_AGREEMENT_USER_AGREEMENT)
                    .table(UserAgreement::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserAgreement::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserAgreement {
    Table,
    Id,
    UserId,
    AgreementId,
    Agreed,
}
