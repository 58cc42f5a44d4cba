#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        event::EventDto,
        job::{JobDto, JobForm, JobWithShiftsDto, JobsAndShiftsDto},
        shift::ShiftDto,
    },
    server::{
        data::{helper_shift::HelperShiftRepository, job::JobRepository, shift::ShiftRepository},
        error::{validation::ValidationError, Error},
        model::db::{EventModel, JobModel},
        service::{cascade, validate},
    },
};

/// Job form after validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedJob {
    pub name: String,
    pub description: String,
    pub position: i32,
}

impl ValidatedJob {
    pub fn from_form(form: JobForm) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let name = validate::required(&mut errors, "name", &form.name, validate::MAX_NAME_LENGTH);

        if form.position < 0 {
            errors.add("position", "Ensure this value is greater than or equal to 0.");
        }

        errors.into_result(Self {
            name,
            description: form.description.trim().to_string(),
            position: form.position,
        })
    }
}

/// Jobs of an event in display order, each with its shifts and registration counts
pub async fn jobs_with_shifts<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
) -> Result<Vec<JobWithShiftsDto>, Error> {
    let jobs = JobRepository::new(db).get_many_by_event_id(event_id).await?;
    let job_ids: Vec<i32> = jobs.iter().map(|job| job.id).collect();

    let shifts = ShiftRepository::new(db).get_many_by_job_ids(&job_ids).await?;
    let shift_ids: Vec<i32> = shifts.iter().map(|shift| shift.id).collect();
    let counts = HelperShiftRepository::new(db)
        .count_by_shift_ids(&shift_ids)
        .await?;

    let mut shifts_by_job: HashMap<i32, Vec<ShiftDto>> = HashMap::new();
    for shift in shifts {
        let registered = counts.get(&shift.id).copied().unwrap_or(0);
        shifts_by_job
            .entry(shift.job_id)
            .or_default()
            .push(ShiftDto::new(shift, registered));
    }

    Ok(jobs
        .into_iter()
        .map(|job| JobWithShiftsDto {
            shifts: shifts_by_job.remove(&job.id).unwrap_or_default(),
            job: JobDto::from(job),
        })
        .collect())
}

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of [`JobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Overview of an event's jobs with their shifts
    pub async fn jobs_and_shifts(&self, event: &EventModel) -> Result<JobsAndShiftsDto, Error> {
        Ok(JobsAndShiftsDto {
            jobs: jobs_with_shifts(self.db, event.id).await?,
            event: EventDto::from(event.clone()),
        })
    }

    pub fn validate(&self, form: JobForm) -> Result<ValidatedJob, Error> {
        Ok(ValidatedJob::from_form(form)?)
    }

    /// Creates a job for `event` or updates `existing`
    pub async fn save(
        &self,
        event: &EventModel,
        existing: Option<JobModel>,
        job: ValidatedJob,
    ) -> Result<JobModel, Error> {
        let job_repo = JobRepository::new(self.db);

        let saved = match existing {
            Some(existing) => {
                job_repo
                    .update(existing, &job.name, &job.description, job.position)
                    .await?
            }
            None => {
                job_repo
                    .create(event.id, &job.name, &job.description, job.position)
                    .await?
            }
        };

        tracing::info!(event_id = event.id, job_id = saved.id, "Saved job");

        Ok(saved)
    }

    /// Whether any shift of the job has registered helpers
    pub async fn helpers_registered(&self, job: &JobModel) -> Result<bool, Error> {
        let shift_ids: Vec<i32> = ShiftRepository::new(self.db)
            .get_many_by_job_id(job.id)
            .await?
            .into_iter()
            .map(|shift| shift.id)
            .collect();

        let helper_ids = HelperShiftRepository::new(self.db)
            .get_helper_ids_by_shift_ids(&shift_ids)
            .await?;

        Ok(!helper_ids.is_empty())
    }

    /// Deletes the job with its shifts, registrations and helpers left without shifts
    pub async fn delete(&self, job: &JobModel) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        cascade::delete_jobs(&txn, &[job.id]).await?;
        txn.commit().await?;

        tracing::info!(event_id = job.event_id, job_id = job.id, "Deleted job");

        Ok(())
    }
}
