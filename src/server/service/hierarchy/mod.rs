//! Resolution of nested URL identifiers.
//!
//! Admin and public URLs address objects below an event, e.g.
//! `/events/{event}/jobs/{job}/helpers/{helper}`. [`HierarchyResolver::get_or_404`] loads
//! every requested object and verifies that each requested pair is actually related, so a
//! job of another event can never be reached through this event's URL.

#[cfg(test)]
mod tests;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        event::EventRepository, helper::HelperRepository, helper_shift::HelperShiftRepository,
        job::JobRepository, shift::ShiftRepository,
    },
    error::{access::AccessError, Error},
    model::db::{EventModel, HelperModel, JobModel, ShiftModel},
};

/// Identifiers taken from a request path, any subset may be present
#[derive(Clone, Copy, Debug, Default)]
pub struct HierarchyQuery<'q> {
    pub event_url_name: Option<&'q str>,
    pub job_id: Option<i32>,
    pub shift_id: Option<i32>,
    pub helper_id: Option<i32>,
}

impl<'q> HierarchyQuery<'q> {
    pub fn event(url_name: &'q str) -> Self {
        Self {
            event_url_name: Some(url_name),
            ..Default::default()
        }
    }

    pub fn job(mut self, job_id: i32) -> Self {
        self.job_id = Some(job_id);
        self
    }

    pub fn shift(mut self, shift_id: i32) -> Self {
        self.shift_id = Some(shift_id);
        self
    }

    pub fn helper(mut self, helper_id: i32) -> Self {
        self.helper_id = Some(helper_id);
        self
    }
}

/// Objects loaded for a [`HierarchyQuery`], each present exactly when it was requested
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hierarchy {
    pub event: Option<EventModel>,
    pub job: Option<JobModel>,
    pub shift: Option<ShiftModel>,
    pub helper: Option<HelperModel>,
}

impl Hierarchy {
    pub fn event(&self) -> Result<&EventModel, Error> {
        self.event.as_ref().ok_or_else(|| not_requested("event"))
    }

    pub fn job(&self) -> Result<&JobModel, Error> {
        self.job.as_ref().ok_or_else(|| not_requested("job"))
    }

    pub fn shift(&self) -> Result<&ShiftModel, Error> {
        self.shift.as_ref().ok_or_else(|| not_requested("shift"))
    }

    pub fn helper(&self) -> Result<&HelperModel, Error> {
        self.helper.as_ref().ok_or_else(|| not_requested("helper"))
    }
}

fn not_requested(object: &str) -> Error {
    Error::InternalError(format!(
        "Accessed {} of a hierarchy that was resolved without it",
        object
    ))
}

pub struct HierarchyResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HierarchyResolver<'a, C> {
    /// Creates a new instance of [`HierarchyResolver`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the requested objects and checks that they belong together
    ///
    /// Pairs checked when both sides are requested:
    /// - event & job: the job belongs to the event
    /// - job & shift: the shift belongs to the job
    /// - event & shift without job: the shift's job belongs to the event
    /// - event & helper: the helper registered for the event
    /// - shift & helper: the helper is registered for the shift
    /// - job & helper: the helper is registered for at least one shift of the job
    ///
    /// # Returns
    /// - `Ok(Hierarchy)` - Every object exists and every checked pair is related
    /// - `Err(Error::AccessError(AccessError::NotFound))` - Unknown object or unrelated pair
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_or_404(&self, query: HierarchyQuery<'_>) -> Result<Hierarchy, Error> {
        let event = match query.event_url_name {
            Some(url_name) => Some(
                EventRepository::new(self.db)
                    .get_by_url_name(url_name)
                    .await?
                    .ok_or(AccessError::NotFound)?,
            ),
            None => None,
        };

        let job = match query.job_id {
            Some(job_id) => Some(
                JobRepository::new(self.db)
                    .get(job_id)
                    .await?
                    .ok_or(AccessError::NotFound)?,
            ),
            None => None,
        };

        let shift = match query.shift_id {
            Some(shift_id) => Some(
                ShiftRepository::new(self.db)
                    .get(shift_id)
                    .await?
                    .ok_or(AccessError::NotFound)?,
            ),
            None => None,
        };

        let helper = match query.helper_id {
            Some(helper_id) => Some(
                HelperRepository::new(self.db)
                    .get(helper_id)
                    .await?
                    .ok_or(AccessError::NotFound)?,
            ),
            None => None,
        };

        let hierarchy = Hierarchy {
            event,
            job,
            shift,
            helper,
        };

        self.check_relations(&hierarchy).await?;

        Ok(hierarchy)
    }

    async fn check_relations(&self, hierarchy: &Hierarchy) -> Result<(), Error> {
        let registration_repo = HelperShiftRepository::new(self.db);

        if let (Some(event), Some(job)) = (&hierarchy.event, &hierarchy.job) {
            ensure(job.event_id == event.id)?;
        }

        if let (Some(job), Some(shift)) = (&hierarchy.job, &hierarchy.shift) {
            ensure(shift.job_id == job.id)?;
        }

        if let (Some(event), Some(shift), None) = (&hierarchy.event, &hierarchy.shift, &hierarchy.job)
        {
            let shift_job = JobRepository::new(self.db).get(shift.job_id).await?;
            ensure(shift_job.is_some_and(|job| job.event_id == event.id))?;
        }

        if let (Some(event), Some(helper)) = (&hierarchy.event, &hierarchy.helper) {
            ensure(helper.event_id == event.id)?;
        }

        if let (Some(shift), Some(helper)) = (&hierarchy.shift, &hierarchy.helper) {
            ensure(registration_repo.is_registered(helper.id, shift.id).await?)?;
        }

        if let (Some(job), Some(helper)) = (&hierarchy.job, &hierarchy.helper) {
            let shift_ids = registration_repo.get_shift_ids_by_helper_id(helper.id).await?;
            let shifts = ShiftRepository::new(self.db).get_many(&shift_ids).await?;

            ensure(shifts.iter().any(|shift| shift.job_id == job.id))?;
        }

        Ok(())
    }
}

fn ensure(related: bool) -> Result<(), Error> {
    if related {
        Ok(())
    } else {
        Err(AccessError::NotFound.into())
    }
}
