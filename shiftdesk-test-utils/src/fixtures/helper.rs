use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_EMAIL_DOMAIN, error::TestError, TestContext};

impl TestContext {
    pub fn helper(&self) -> HelperFixtures<'_> {
        HelperFixtures { setup: self }
    }
}

pub struct HelperFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> HelperFixtures<'a> {
    pub async fn insert_helper(
        &self,
        event_id: i32,
        prename: &str,
        surname: &str,
    ) -> Result<entity::helper::Model, TestError> {
        Ok(
            entity::prelude::Helper::insert(entity::helper::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                prename: ActiveValue::Set(prename.to_string()),
                surname: ActiveValue::Set(surname.to_string()),
                email: ActiveValue::Set(format!(
                    "{}.{}@{}",
                    prename.to_lowercase(),
                    surname.to_lowercase(),
                    TEST_EMAIL_DOMAIN
                )),
                phone: ActiveValue::Set(String::new()),
                comment: ActiveValue::Set(String::new()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Registers an existing helper for a shift.
    pub async fn register(
        &self,
        helper_id: i32,
        shift_id: i32,
    ) -> Result<entity::helper_shift::Model, TestError> {
        Ok(
            entity::prelude::HelperShift::insert(entity::helper_shift::ActiveModel {
                helper_id: ActiveValue::Set(helper_id),
                shift_id: ActiveValue::Set(shift_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a helper and registers them for `shift_id`.
    pub async fn insert_helper_for_shift(
        &self,
        event_id: i32,
        shift_id: i32,
        prename: &str,
        surname: &str,
    ) -> Result<entity::helper::Model, TestError> {
        let helper = self.insert_helper(event_id, prename, surname).await?;
        self.register(helper.id, shift_id).await?;

        Ok(helper)
    }
}
