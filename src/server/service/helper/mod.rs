#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        event::EventDto,
        helper::{
            HelperDeleteDto, HelperDeleteForm, HelperDto, HelperEditDto, HelperForm,
            HelpersDto, JobHelperCountDto, JobHelpersDto, ShiftHelpersDto,
        },
        job::JobDto,
        shift::ShiftDto,
    },
    server::{
        data::{
            helper::{HelperData, HelperRepository},
            helper_shift::HelperShiftRepository,
            job::JobRepository,
            shift::ShiftRepository,
        },
        error::{delete::DeleteError, validation::ValidationError, Error},
        model::db::{EventModel, HelperModel, JobModel, ShiftModel},
        service::{cascade, validate},
    },
};

/// Personal data of a helper after validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedHelper {
    pub prename: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
}

impl ValidatedHelper {
    pub fn from_form(form: HelperForm) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let helper = Self {
            prename: validate::required(
                &mut errors,
                "prename",
                &form.prename,
                validate::MAX_NAME_LENGTH,
            ),
            surname: validate::required(
                &mut errors,
                "surname",
                &form.surname,
                validate::MAX_NAME_LENGTH,
            ),
            email: validate::email(&mut errors, "email", &form.email),
            phone: validate::optional(&mut errors, "phone", &form.phone, validate::MAX_PHONE_LENGTH),
            comment: form.comment.trim().to_string(),
        };

        errors.into_result(helper)
    }

    pub fn data(&self) -> HelperData<'_> {
        HelperData {
            prename: &self.prename,
            surname: &self.surname,
            email: &self.email,
            phone: &self.phone,
            comment: &self.comment,
        }
    }
}

/// Outcome of removing a helper from shifts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelperRemoval {
    /// Number of registrations removed
    pub unregistered: usize,
    /// Whether the helper was deleted because no registration is left
    pub helper_deleted: bool,
}

pub struct HelperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HelperService<'a> {
    /// Creates a new instance of [`HelperService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of distinct helpers per job of the event
    pub async fn overview(&self, event: &EventModel) -> Result<HelpersDto, Error> {
        let jobs = JobRepository::new(self.db)
            .get_many_by_event_id(event.id)
            .await?;
        let job_ids: Vec<i32> = jobs.iter().map(|job| job.id).collect();

        let shifts = ShiftRepository::new(self.db)
            .get_many_by_job_ids(&job_ids)
            .await?;
        let job_of_shift: HashMap<i32, i32> =
            shifts.iter().map(|shift| (shift.id, shift.job_id)).collect();
        let shift_ids: Vec<i32> = shifts.iter().map(|shift| shift.id).collect();

        let registrations = HelperShiftRepository::new(self.db)
            .get_many_by_shift_ids(&shift_ids)
            .await?;

        let mut helpers_by_job: HashMap<i32, HashSet<i32>> = HashMap::new();
        for registration in registrations {
            if let Some(job_id) = job_of_shift.get(&registration.shift_id) {
                helpers_by_job
                    .entry(*job_id)
                    .or_default()
                    .insert(registration.helper_id);
            }
        }

        Ok(HelpersDto {
            event: EventDto::from(event.clone()),
            jobs: jobs
                .into_iter()
                .map(|job| JobHelperCountDto {
                    helpers: helpers_by_job.get(&job.id).map_or(0, |ids| ids.len() as u64),
                    job: JobDto::from(job),
                })
                .collect(),
        })
    }

    /// Shifts of a job, each with the helpers registered for it
    pub async fn job_helpers(
        &self,
        event: &EventModel,
        job: &JobModel,
    ) -> Result<JobHelpersDto, Error> {
        let shifts = ShiftRepository::new(self.db)
            .get_many_by_job_id(job.id)
            .await?;
        let shift_ids: Vec<i32> = shifts.iter().map(|shift| shift.id).collect();

        let registrations = HelperShiftRepository::new(self.db)
            .get_many_by_shift_ids(&shift_ids)
            .await?;
        let helper_ids: Vec<i32> = registrations.iter().map(|r| r.helper_id).collect();
        let helpers = HelperRepository::new(self.db).get_many(&helper_ids).await?;

        let shifts = shifts
            .into_iter()
            .map(|shift| {
                let registered: Vec<HelperDto> = helpers
                    .iter()
                    .filter(|helper| {
                        registrations
                            .iter()
                            .any(|r| r.shift_id == shift.id && r.helper_id == helper.id)
                    })
                    .cloned()
                    .map(HelperDto::from)
                    .collect();

                ShiftHelpersDto {
                    shift: ShiftDto::new(shift, registered.len() as u64),
                    helpers: registered,
                }
            })
            .collect();

        Ok(JobHelpersDto {
            event: EventDto::from(event.clone()),
            job: JobDto::from(job.clone()),
            shifts,
        })
    }

    /// All shifts the helper is registered for, ordered by begin
    pub async fn shifts_of(&self, helper: &HelperModel) -> Result<Vec<ShiftModel>, Error> {
        let shift_ids = HelperShiftRepository::new(self.db)
            .get_shift_ids_by_helper_id(helper.id)
            .await?;

        Ok(ShiftRepository::new(self.db).get_many(&shift_ids).await?)
    }

    /// The helper's shifts within one job
    pub async fn shifts_in_job(
        &self,
        helper: &HelperModel,
        job: &JobModel,
    ) -> Result<Vec<ShiftModel>, Error> {
        Ok(self
            .shifts_of(helper)
            .await?
            .into_iter()
            .filter(|shift| shift.job_id == job.id)
            .collect())
    }

    /// Attaches registration counts to shifts
    pub async fn shift_dtos(&self, shifts: Vec<ShiftModel>) -> Result<Vec<ShiftDto>, Error> {
        let shift_ids: Vec<i32> = shifts.iter().map(|shift| shift.id).collect();
        let counts = HelperShiftRepository::new(self.db)
            .count_by_shift_ids(&shift_ids)
            .await?;

        Ok(shifts
            .into_iter()
            .map(|shift| {
                let registered = counts.get(&shift.id).copied().unwrap_or(0);
                ShiftDto::new(shift, registered)
            })
            .collect())
    }

    pub async fn edit_context(
        &self,
        event: &EventModel,
        helper: &HelperModel,
    ) -> Result<HelperEditDto, Error> {
        let shifts = self.shifts_of(helper).await?;

        Ok(HelperEditDto {
            event: EventDto::from(event.clone()),
            helper: HelperDto::from(helper.clone()),
            shifts: self.shift_dtos(shifts).await?,
        })
    }

    pub async fn delete_context(
        &self,
        event: &EventModel,
        job: &JobModel,
        helper: &HelperModel,
    ) -> Result<HelperDeleteDto, Error> {
        let shifts = self.shifts_in_job(helper, job).await?;

        Ok(HelperDeleteDto {
            event: EventDto::from(event.clone()),
            job: JobDto::from(job.clone()),
            helper: HelperDto::from(helper.clone()),
            shifts: self.shift_dtos(shifts).await?,
        })
    }

    pub fn validate(&self, form: HelperForm) -> Result<ValidatedHelper, Error> {
        Ok(ValidatedHelper::from_form(form)?)
    }

    /// Stores the edited personal data, registrations stay untouched
    pub async fn save(
        &self,
        helper: HelperModel,
        data: ValidatedHelper,
    ) -> Result<HelperModel, Error> {
        let saved = HelperRepository::new(self.db)
            .update(helper, data.data())
            .await?;

        tracing::info!(event_id = saved.event_id, helper_id = saved.id, "Saved helper");

        Ok(saved)
    }

    /// Removes the helper from the selected shifts of `job`
    ///
    /// Without a selection every shift of the helper within the job is removed. The helper
    /// is deleted when no registration is left.
    ///
    /// # Returns
    /// - `Ok(HelperRemoval)` - Registrations removed
    /// - `Err(Error::DeleteError(DeleteError::NotConfirmed))` - `confirm` was not set
    /// - `Err(Error::DeleteError(DeleteError::InvalidShiftSelection))` - A selected shift is
    ///   not a registration of the helper within the job
    pub async fn delete(
        &self,
        job: &JobModel,
        helper: &HelperModel,
        form: HelperDeleteForm,
    ) -> Result<HelperRemoval, Error> {
        if !form.confirm {
            return Err(DeleteError::NotConfirmed.into());
        }

        let shift_ids = self.selected_shift_ids(job, helper, form.shifts).await?;

        let txn = self.db.begin().await?;
        let helper_deleted = cascade::unregister_helper(&txn, helper.id, &shift_ids).await?;
        txn.commit().await?;

        tracing::info!(
            job_id = job.id,
            helper_id = helper.id,
            shifts = shift_ids.len(),
            helper_deleted,
            "Removed helper from shifts"
        );

        Ok(HelperRemoval {
            unregistered: shift_ids.len(),
            helper_deleted,
        })
    }

    async fn selected_shift_ids(
        &self,
        job: &JobModel,
        helper: &HelperModel,
        selection: Option<Vec<i32>>,
    ) -> Result<Vec<i32>, Error> {
        let shift_ids: Vec<i32> = self
            .shifts_in_job(helper, job)
            .await?
            .into_iter()
            .map(|shift| shift.id)
            .collect();

        let Some(mut selection) = selection.filter(|selection| !selection.is_empty()) else {
            return Ok(shift_ids);
        };

        selection.sort_unstable();
        selection.dedup();

        if let Some(invalid) = selection.iter().find(|id| !shift_ids.contains(id)) {
            return Err(DeleteError::InvalidShiftSelection(*invalid).into());
        }

        Ok(selection)
    }
}
