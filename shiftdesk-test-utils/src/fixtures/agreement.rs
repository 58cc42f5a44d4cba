use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn agreement(&self) -> AgreementFixtures<'_> {
        AgreementFixtures { setup: self }
    }
}

pub struct AgreementFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AgreementFixtures<'a> {
    pub async fn insert_agreement(
        &self,
        name: &str,
        begin: NaiveDate,
    ) -> Result<entity::agreement::Model, TestError> {
        Ok(
            entity::prelude::Agreement::insert(entity::agreement::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                text: ActiveValue::Set(format!("<p>{}</p>", name)),
                begin: ActiveValue::Set(begin),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_user_agreement(
        &self,
        user_id: i32,
        agreement_id: i32,
        agreed: Option<NaiveDateTime>,
    ) -> Result<entity::user_agreement::Model, TestError> {
        Ok(
            entity::prelude::UserAgreement::insert(entity::user_agreement::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                agreement_id: ActiveValue::Set(agreement_id),
                agreed: ActiveValue::Set(agreed),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
