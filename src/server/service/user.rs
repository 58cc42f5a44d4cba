use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::Error, model::db::UserModel};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get(user_id).await?)
    }
}
