use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};

pub struct EventAdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventAdminRepository<'a, C> {
    /// Creates a new instance of [`EventAdminRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn is_admin(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventAdmin::find()
            .filter(entity::event_admin::Column::EventId.eq(event_id))
            .filter(entity::event_admin::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_user_ids(&self, event_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::EventAdmin::find()
            .select_only()
            .column(entity::event_admin::Column::UserId)
            .filter(entity::event_admin::Column::EventId.eq(event_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// IDs of the events administered by `user_id`
    pub async fn get_event_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::EventAdmin::find()
            .select_only()
            .column(entity::event_admin::Column::EventId)
            .filter(entity::event_admin::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces the admin set of an event with `user_ids`
    pub async fn replace(&self, event_id: i32, user_ids: &[i32]) -> Result<(), DbErr> {
        self.delete_by_event_id(event_id).await?;

        if user_ids.is_empty() {
            return Ok(());
        }

        let admins = user_ids
            .iter()
            .map(|user_id| entity::event_admin::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(*user_id),
            });

        entity::prelude::EventAdmin::insert_many(admins)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_event_id(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::EventAdmin::delete_many()
            .filter(entity::event_admin::Column::EventId.eq(event_id))
            .exec(self.db)
            .await
    }
}
