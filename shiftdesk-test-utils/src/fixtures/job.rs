use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn job(&self) -> JobFixtures<'_> {
        JobFixtures { setup: self }
    }
}

pub struct JobFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> JobFixtures<'a> {
    pub async fn insert_job(
        &self,
        event_id: i32,
        name: &str,
        position: i32,
    ) -> Result<entity::job::Model, TestError> {
        Ok(entity::prelude::Job::insert(entity::job::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(String::new()),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
