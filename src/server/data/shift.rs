use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

pub struct ShiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShiftRepository<'a, C> {
    /// Creates a new instance of [`ShiftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        job_id: i32,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        number: i32,
    ) -> Result<entity::shift::Model, DbErr> {
        entity::prelude::Shift::insert(entity::shift::ActiveModel {
            job_id: ActiveValue::Set(job_id),
            begin: ActiveValue::Set(begin),
            end: ActiveValue::Set(end),
            number: ActiveValue::Set(number),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, shift_id: i32) -> Result<Option<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find_by_id(shift_id)
            .one(self.db)
            .await
    }

    /// Gets a shift and locks its row until the surrounding transaction ends
    ///
    /// Serializes concurrent registrations for the same shift on backends with row locks.
    pub async fn get_for_update(
        &self,
        shift_id: i32,
    ) -> Result<Option<entity::shift::Model>, DbErr> {
        entity::prelude::Shift::find_by_id(shift_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Gets shifts by ID ordered by begin, unknown IDs are skipped
    pub async fn get_many(&self, shift_ids: &[i32]) -> Result<Vec<entity::shift::Model>, DbErr> {
        if shift_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Shift::find()
            .filter(entity::shift::Column::Id.is_in(shift_ids.iter().copied()))
            .order_by_asc(entity::shift::Column::Begin)
            .order_by_asc(entity::shift::Column::Id)
            .all(self.db)
            .await
    }

    /// Shifts of a job ordered by begin
    pub async fn get_many_by_job_id(
        &self,
        job_id: i32,
    ) -> Result<Vec<entity::shift::Model>, DbErr> {
        self.get_many_by_job_ids(&[job_id]).await
    }

    /// Shifts of several jobs ordered by begin
    pub async fn get_many_by_job_ids(
        &self,
        job_ids: &[i32],
    ) -> Result<Vec<entity::shift::Model>, DbErr> {
        if job_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Shift::find()
            .filter(entity::shift::Column::JobId.is_in(job_ids.iter().copied()))
            .order_by_asc(entity::shift::Column::Begin)
            .order_by_asc(entity::shift::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        shift: entity::shift::Model,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        number: i32,
    ) -> Result<entity::shift::Model, DbErr> {
        let mut shift_am = shift.into_active_model();
        shift_am.begin = ActiveValue::Set(begin);
        shift_am.end = ActiveValue::Set(end);
        shift_am.number = ActiveValue::Set(number);

        shift_am.update(self.db).await
    }

    /// Deletes shifts, their registrations must be removed first
    pub async fn delete_many(&self, shift_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Shift::delete_many()
            .filter(entity::shift::Column::Id.is_in(shift_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
