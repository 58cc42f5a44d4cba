use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, factory, TestContext};

impl TestContext {
    pub fn shift(&self) -> ShiftFixtures<'_> {
        ShiftFixtures { setup: self }
    }
}

pub struct ShiftFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ShiftFixtures<'a> {
    pub async fn insert_shift(
        &self,
        job_id: i32,
        begin: NaiveDateTime,
        end: NaiveDateTime,
        number: i32,
    ) -> Result<entity::shift::Model, TestError> {
        Ok(entity::prelude::Shift::insert(entity::shift::ActiveModel {
            job_id: ActiveValue::Set(job_id),
            begin: ActiveValue::Set(begin),
            end: ActiveValue::Set(end),
            number: ActiveValue::Set(number),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Inserts a two hour shift on 2026-06-01 starting at `hour`.
    pub async fn insert_mock_shift(
        &self,
        job_id: i32,
        hour: u32,
        number: i32,
    ) -> Result<entity::shift::Model, TestError> {
        self.insert_shift(
            job_id,
            factory::datetime(1, hour),
            factory::datetime(1, hour + 2),
            number,
        )
        .await
    }
}
