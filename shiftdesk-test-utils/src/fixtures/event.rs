use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_EVENT_EMAIL, error::TestError, TestContext};

impl TestContext {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EventFixtures<'a> {
    /// Inserts an event named after its slug.
    pub async fn insert_event(
        &self,
        url_name: &str,
        active: bool,
    ) -> Result<entity::event::Model, TestError> {
        self.insert_named_event(url_name, url_name, active).await
    }

    pub async fn insert_named_event(
        &self,
        url_name: &str,
        name: &str,
        active: bool,
    ) -> Result<entity::event::Model, TestError> {
        Ok(
            entity::prelude::Event::insert(entity::event::ActiveModel {
                url_name: ActiveValue::Set(url_name.to_string()),
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(TEST_EVENT_EMAIL.to_string()),
                active: ActiveValue::Set(active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Adds `user_id` to the admin set of `event_id`.
    pub async fn insert_admin(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_admin::Model, TestError> {
        Ok(
            entity::prelude::EventAdmin::insert(entity::event_admin::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
