use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct AgreementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AgreementRepository<'a, C> {
    /// Creates a new instance of [`AgreementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        text: &str,
        begin: NaiveDate,
    ) -> Result<entity::agreement::Model, DbErr> {
        entity::prelude::Agreement::insert(entity::agreement::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            text: ActiveValue::Set(text.to_string()),
            begin: ActiveValue::Set(begin),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, agreement_id: i32) -> Result<Option<entity::agreement::Model>, DbErr> {
        entity::prelude::Agreement::find_by_id(agreement_id)
            .one(self.db)
            .await
    }

    /// Agreements in effect on `today`, oldest first
    pub async fn get_effective(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<entity::agreement::Model>, DbErr> {
        entity::prelude::Agreement::find()
            .filter(entity::agreement::Column::Begin.lte(today))
            .order_by_asc(entity::agreement::Column::Begin)
            .order_by_asc(entity::agreement::Column::Id)
            .all(self.db)
            .await
    }
}

pub struct UserAgreementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserAgreementRepository<'a, C> {
    /// Creates a new instance of [`UserAgreementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        user_id: i32,
        agreement_id: i32,
    ) -> Result<Option<entity::user_agreement::Model>, DbErr> {
        entity::prelude::UserAgreement::find()
            .filter(entity::user_agreement::Column::UserId.eq(user_id))
            .filter(entity::user_agreement::Column::AgreementId.eq(agreement_id))
            .one(self.db)
            .await
    }

    /// IDs of the agreements `user_id` has accepted
    pub async fn get_agreed_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::UserAgreement::find()
            .filter(entity::user_agreement::Column::UserId.eq(user_id))
            .filter(entity::user_agreement::Column::Agreed.is_not_null())
            .all(self.db)
            .await?
            .into_iter()
            .map(|user_agreement| user_agreement.agreement_id)
            .collect())
    }

    pub async fn create(
        &self,
        user_id: i32,
        agreement_id: i32,
        agreed: Option<NaiveDateTime>,
    ) -> Result<entity::user_agreement::Model, DbErr> {
        entity::prelude::UserAgreement::insert(entity::user_agreement::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            agreement_id: ActiveValue::Set(agreement_id),
            agreed: ActiveValue::Set(agreed),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn set_agreed(
        &self,
        user_agreement: entity::user_agreement::Model,
        agreed: NaiveDateTime,
    ) -> Result<entity::user_agreement::Model, DbErr> {
        let mut user_agreement_am = user_agreement.into_active_model();
        user_agreement_am.agreed = ActiveValue::Set(Some(agreed));

        user_agreement_am.update(self.db).await
    }
}
