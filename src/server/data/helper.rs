use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Personal data of a helper as stored by [`HelperRepository`]
pub struct HelperData<'d> {
    pub prename: &'d str,
    pub surname: &'d str,
    pub email: &'d str,
    pub phone: &'d str,
    pub comment: &'d str,
}

pub struct HelperRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HelperRepository<'a, C> {
    /// Creates a new instance of [`HelperRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        event_id: i32,
        data: HelperData<'_>,
    ) -> Result<entity::helper::Model, DbErr> {
        entity::prelude::Helper::insert(entity::helper::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            prename: ActiveValue::Set(data.prename.to_string()),
            surname: ActiveValue::Set(data.surname.to_string()),
            email: ActiveValue::Set(data.email.to_string()),
            phone: ActiveValue::Set(data.phone.to_string()),
            comment: ActiveValue::Set(data.comment.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, helper_id: i32) -> Result<Option<entity::helper::Model>, DbErr> {
        entity::prelude::Helper::find_by_id(helper_id)
            .one(self.db)
            .await
    }

    /// Gets helpers by ID ordered by surname and prename
    pub async fn get_many(
        &self,
        helper_ids: &[i32],
    ) -> Result<Vec<entity::helper::Model>, DbErr> {
        if helper_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Helper::find()
            .filter(entity::helper::Column::Id.is_in(helper_ids.iter().copied()))
            .order_by_asc(entity::helper::Column::Surname)
            .order_by_asc(entity::helper::Column::Prename)
            .order_by_asc(entity::helper::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_ids_by_event_id(&self, event_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Helper::find()
            .select_only()
            .column(entity::helper::Column::Id)
            .filter(entity::helper::Column::EventId.eq(event_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        helper: entity::helper::Model,
        data: HelperData<'_>,
    ) -> Result<entity::helper::Model, DbErr> {
        let mut helper_am = helper.into_active_model();
        helper_am.prename = ActiveValue::Set(data.prename.to_string());
        helper_am.surname = ActiveValue::Set(data.surname.to_string());
        helper_am.email = ActiveValue::Set(data.email.to_string());
        helper_am.phone = ActiveValue::Set(data.phone.to_string());
        helper_am.comment = ActiveValue::Set(data.comment.to_string());

        helper_am.update(self.db).await
    }

    /// Deletes helpers, their registrations must be removed first
    pub async fn delete_many(&self, helper_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Helper::delete_many()
            .filter(entity::helper::Column::Id.is_in(helper_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
