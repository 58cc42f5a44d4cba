use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        url_name: &str,
        name: &str,
        email: &str,
        active: bool,
    ) -> Result<entity::event::Model, DbErr> {
        entity::prelude::Event::insert(entity::event::ActiveModel {
            url_name: ActiveValue::Set(url_name.to_string()),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            active: ActiveValue::Set(active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id).one(self.db).await
    }

    pub async fn get_by_url_name(
        &self,
        url_name: &str,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::UrlName.eq(url_name))
            .one(self.db)
            .await
    }

    /// All events, newest first
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Whether another event than `except_event_id` already uses `url_name`
    pub async fn url_name_taken(
        &self,
        url_name: &str,
        except_event_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Event::find().filter(entity::event::Column::UrlName.eq(url_name));

        if let Some(event_id) = except_event_id {
            query = query.filter(entity::event::Column::Id.ne(event_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(
        &self,
        event: entity::event::Model,
        url_name: &str,
        name: &str,
        email: &str,
        active: bool,
    ) -> Result<entity::event::Model, DbErr> {
        let mut event_am = event.into_active_model();
        event_am.url_name = ActiveValue::Set(url_name.to_string());
        event_am.name = ActiveValue::Set(name.to_string());
        event_am.email = ActiveValue::Set(email.to_string());
        event_am.active = ActiveValue::Set(active);

        event_am.update(self.db).await
    }

    /// Deletes an event
    ///
    /// Fails with a foreign key violation while jobs, helpers or admins still reference the
    /// event, remove them first.
    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await
    }
}
