#[cfg(test)]
mod tests;

use chrono::NaiveDateTime;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::shift::{ShiftDto, ShiftForm},
    server::{
        data::{helper_shift::HelperShiftRepository, shift::ShiftRepository},
        error::{validation::ValidationError, Error},
        model::db::{JobModel, ShiftModel},
        service::cascade,
    },
};

/// Shift form after validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedShift {
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    pub number: i32,
}

impl ValidatedShift {
    /// Checks that the shift ends after it begins and wants a non-negative number of helpers
    pub fn from_form(form: ShiftForm) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        if form.end <= form.begin {
            errors.add("end", "The shift must end after it begins.");
        }

        if form.number < 0 {
            errors.add("number", "Ensure this value is greater than or equal to 0.");
        }

        errors.into_result(Self {
            begin: form.begin,
            end: form.end,
            number: form.number,
        })
    }
}

pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftService<'a> {
    /// Creates a new instance of [`ShiftService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of helpers registered for the shift
    pub async fn registered_count(&self, shift: &ShiftModel) -> Result<u64, Error> {
        Ok(HelperShiftRepository::new(self.db)
            .count_by_shift_id(shift.id)
            .await?)
    }

    pub async fn to_dto(&self, shift: ShiftModel) -> Result<ShiftDto, Error> {
        let registered = self.registered_count(&shift).await?;

        Ok(ShiftDto::new(shift, registered))
    }

    /// Validates the form, an edited shift may not want fewer helpers than already registered
    pub async fn validate(
        &self,
        form: ShiftForm,
        existing: Option<&ShiftModel>,
    ) -> Result<ValidatedShift, Error> {
        let mut errors = match ValidatedShift::from_form(form.clone()) {
            Ok(_) => ValidationError::new(),
            Err(errors) => errors,
        };

        if let Some(existing) = existing {
            let registered = self.registered_count(existing).await?;

            if form.number > 0 && (form.number as u64) < registered {
                errors.add(
                    "number",
                    format!(
                        "{} helpers are already registered for this shift.",
                        registered
                    ),
                );
            }
        }

        Ok(errors.into_result(ValidatedShift {
            begin: form.begin,
            end: form.end,
            number: form.number,
        })?)
    }

    /// Creates a shift for `job` or updates `existing`
    pub async fn save(
        &self,
        job: &JobModel,
        existing: Option<ShiftModel>,
        shift: ValidatedShift,
    ) -> Result<ShiftModel, Error> {
        let shift_repo = ShiftRepository::new(self.db);

        let saved = match existing {
            Some(existing) => {
                shift_repo
                    .update(existing, shift.begin, shift.end, shift.number)
                    .await?
            }
            None => {
                shift_repo
                    .create(job.id, shift.begin, shift.end, shift.number)
                    .await?
            }
        };

        tracing::info!(job_id = job.id, shift_id = saved.id, "Saved shift");

        Ok(saved)
    }

    /// Deletes the shift with its registrations and helpers left without shifts
    pub async fn delete(&self, shift: &ShiftModel) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        cascade::delete_shifts(&txn, &[shift.id]).await?;
        txn.commit().await?;

        tracing::info!(job_id = shift.job_id, shift_id = shift.id, "Deleted shift");

        Ok(())
    }
}
