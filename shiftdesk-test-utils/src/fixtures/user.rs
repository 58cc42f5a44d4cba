use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_EMAIL_DOMAIN, error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a regular user.
    pub async fn insert_user(&self, username: &str) -> Result<entity::app_user::Model, TestError> {
        self.insert(username, false).await
    }

    /// Inserts a user with global admin rights.
    pub async fn insert_superuser(
        &self,
        username: &str,
    ) -> Result<entity::app_user::Model, TestError> {
        self.insert(username, true).await
    }

    async fn insert(
        &self,
        username: &str,
        is_superuser: bool,
    ) -> Result<entity::app_user::Model, TestError> {
        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@{}", username, TEST_EMAIL_DOMAIN)),
                is_superuser: ActiveValue::Set(is_superuser),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
