use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QuerySelect,
};

/// Registrations of helpers for shifts
pub struct HelperShiftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HelperShiftRepository<'a, C> {
    /// Creates a new instance of [`HelperShiftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        helper_id: i32,
        shift_id: i32,
    ) -> Result<entity::helper_shift::Model, DbErr> {
        entity::prelude::HelperShift::insert(entity::helper_shift::ActiveModel {
            helper_id: ActiveValue::Set(helper_id),
            shift_id: ActiveValue::Set(shift_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn is_registered(&self, helper_id: i32, shift_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::HelperShift::find()
            .filter(entity::helper_shift::Column::HelperId.eq(helper_id))
            .filter(entity::helper_shift::Column::ShiftId.eq(shift_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_by_shift_id(&self, shift_id: i32) -> Result<u64, DbErr> {
        entity::prelude::HelperShift::find()
            .filter(entity::helper_shift::Column::ShiftId.eq(shift_id))
            .count(self.db)
            .await
    }

    /// Number of registrations per shift, shifts without registrations are absent
    pub async fn count_by_shift_ids(&self, shift_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        let mut counts = HashMap::new();

        for shift_id in self.get_shift_ids_of(shift_ids).await? {
            *counts.entry(shift_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Shift ID of every registration for the given shifts, one entry per registration
    async fn get_shift_ids_of(&self, shift_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if shift_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::HelperShift::find()
            .select_only()
            .column(entity::helper_shift::Column::ShiftId)
            .filter(entity::helper_shift::Column::ShiftId.is_in(shift_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Registrations for the given shifts
    pub async fn get_many_by_shift_ids(
        &self,
        shift_ids: &[i32],
    ) -> Result<Vec<entity::helper_shift::Model>, DbErr> {
        if shift_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::HelperShift::find()
            .filter(entity::helper_shift::Column::ShiftId.is_in(shift_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_shift_ids_by_helper_id(&self, helper_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::HelperShift::find()
            .select_only()
            .column(entity::helper_shift::Column::ShiftId)
            .filter(entity::helper_shift::Column::HelperId.eq(helper_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Distinct helpers registered for any of the given shifts
    pub async fn get_helper_ids_by_shift_ids(
        &self,
        shift_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        Ok(self
            .get_many_by_shift_ids(shift_ids)
            .await?
            .into_iter()
            .map(|registration| registration.helper_id)
            .collect())
    }

    /// Subset of `helper_ids` that still has at least one registration
    pub async fn get_registered_helper_ids(
        &self,
        helper_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if helper_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let registered = entity::prelude::HelperShift::find()
            .select_only()
            .column(entity::helper_shift::Column::HelperId)
            .filter(entity::helper_shift::Column::HelperId.is_in(helper_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(registered.into_iter().collect())
    }

    /// Removes the registrations of one helper for the given shifts
    pub async fn delete_for_helper(
        &self,
        helper_id: i32,
        shift_ids: &[i32],
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::HelperShift::delete_many()
            .filter(entity::helper_shift::Column::HelperId.eq(helper_id))
            .filter(entity::helper_shift::Column::ShiftId.is_in(shift_ids.iter().copied()))
            .exec(self.db)
            .await
    }

    /// Removes every registration for the given shifts
    pub async fn delete_by_shift_ids(&self, shift_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::HelperShift::delete_many()
            .filter(entity::helper_shift::Column::ShiftId.is_in(shift_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod count_by_shift_ids_tests {
        use shiftdesk_test_utils::prelude::*;

        use crate::server::data::helper_shift::HelperShiftRepository;

        /// Expect one count per shift with registrations
        #[tokio::test]
        async fn test_count_registrations_per_shift() -> Result<(), TestError> {
            let test = TestBuilder::new().with_registration_tables().build().await?;
            let event = test.event().insert_event("fair2024", true).await?;
            let job = test.job().insert_job(event.id, "Bar", 0).await?;
            let busy = test.shift().insert_mock_shift(job.id, 10, 0).await?;
            let empty = test.shift().insert_mock_shift(job.id, 14, 0).await?;
            test.helper()
                .insert_helper_for_shift(event.id, busy.id, "Anna", "Adler")
                .await?;
            test.helper()
                .insert_helper_for_shift(event.id, busy.id, "Bert", "Brandt")
                .await?;

            let registration_repo = HelperShiftRepository::new(&test.db);
            let counts = registration_repo
                .count_by_shift_ids(&[busy.id, empty.id])
                .await?;

            assert_eq!(counts.get(&busy.id), Some(&2));
            assert_eq!(counts.get(&empty.id), None);

            Ok(())
        }
    }

    mod get_registered_helper_ids_tests {
        use shiftdesk_test_utils::prelude::*;

        use crate::server::data::helper_shift::HelperShiftRepository;

        /// Expect helpers without registrations to be left out
        #[tokio::test]
        async fn test_only_registered_helpers_returned() -> Result<(), TestError> {
            let test = TestBuilder::new().with_registration_tables().build().await?;
            let event = test.event().insert_event("fair2024", true).await?;
            let job = test.job().insert_job(event.id, "Bar", 0).await?;
            let shift = test.shift().insert_mock_shift(job.id, 10, 0).await?;
            let registered = test
                .helper()
                .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
                .await?;
            let unregistered = test.helper().insert_helper(event.id, "Bert", "Brandt").await?;

            let registration_repo = HelperShiftRepository::new(&test.db);
            let ids = registration_repo
                .get_registered_helper_ids(&[registered.id, unregistered.id])
                .await?;

            assert!(ids.contains(&registered.id));
            assert!(!ids.contains(&unregistered.id));

            Ok(())
        }
    }
}
