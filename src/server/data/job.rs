use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct JobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobRepository<'a, C> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        event_id: i32,
        name: &str,
        description: &str,
        position: i32,
    ) -> Result<entity::job::Model, DbErr> {
        entity::prelude::Job::insert(entity::job::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, job_id: i32) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(job_id).one(self.db).await
    }

    /// Jobs of an event in display order
    pub async fn get_many_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::EventId.eq(event_id))
            .order_by_asc(entity::job::Column::Position)
            .order_by_asc(entity::job::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        job: entity::job::Model,
        name: &str,
        description: &str,
        position: i32,
    ) -> Result<entity::job::Model, DbErr> {
        let mut job_am = job.into_active_model();
        job_am.name = ActiveValue::Set(name.to_string());
        job_am.description = ActiveValue::Set(description.to_string());
        job_am.position = ActiveValue::Set(position);

        job_am.update(self.db).await
    }

    /// Deletes jobs, their shifts must be removed first
    pub async fn delete_many(&self, job_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Job::delete_many()
            .filter(entity::job::Column::Id.is_in(job_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
