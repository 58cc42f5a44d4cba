use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Accounts are normally provisioned by the authentication outside of shiftdesk, this is
    /// used for bootstrapping and tests.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        is_superuser: bool,
    ) -> Result<entity::app_user::Model, DbErr> {
        entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            is_superuser: ActiveValue::Set(is_superuser),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets users by ID ordered by username, unknown IDs are skipped
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<entity::app_user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::app_user::Column::Username)
            .all(self.db)
            .await
    }
}
