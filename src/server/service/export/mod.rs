//! Roster export of an event or a single job.
//!
//! The roster is assembled into a [`Roster`] value first and rendered into an xlsx
//! workbook by [`xlsx::render`] afterwards.

pub mod xlsx;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        helper::HelperRepository, helper_shift::HelperShiftRepository, job::JobRepository,
        shift::ShiftRepository,
    },
    error::Error,
    model::db::{EventModel, JobModel},
    util::filename::escape_filename,
};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Everything written to the workbook, in output order
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    pub title: String,
    /// Pinned document creation time
    pub created_at: NaiveDateTime,
    pub jobs: Vec<RosterJob>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RosterJob {
    pub job_id: i32,
    pub name: String,
    pub shifts: Vec<RosterShift>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RosterShift {
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    pub number: i32,
    /// Ordered by surname, then prename
    pub helpers: Vec<RosterHelper>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RosterHelper {
    pub surname: String,
    pub prename: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
}

impl From<&entity::helper::Model> for RosterHelper {
    fn from(helper: &entity::helper::Model) -> Self {
        Self {
            surname: helper.surname.clone(),
            prename: helper.prename.clone(),
            email: helper.email.clone(),
            phone: helper.phone.clone(),
            comment: helper.comment.clone(),
        }
    }
}

/// `"<event name>"` or `"<event name> - <job name>"` without illegal characters
pub fn export_filename(event: &EventModel, job: Option<&JobModel>) -> String {
    match job {
        Some(job) => escape_filename(&format!("{} - {}", event.name, job.name)),
        None => escape_filename(&event.name),
    }
}

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    /// Creates a new instance of [`ExportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the roster of one job, or of every job of the event in display order
    pub async fn roster(&self, event: &EventModel, job: Option<&JobModel>) -> Result<Roster, Error> {
        let jobs = match job {
            Some(job) => vec![job.clone()],
            None => {
                JobRepository::new(self.db)
                    .get_many_by_event_id(event.id)
                    .await?
            }
        };
        let job_ids: Vec<i32> = jobs.iter().map(|job| job.id).collect();

        let shifts = ShiftRepository::new(self.db)
            .get_many_by_job_ids(&job_ids)
            .await?;
        let shift_ids: Vec<i32> = shifts.iter().map(|shift| shift.id).collect();

        let registrations = HelperShiftRepository::new(self.db)
            .get_many_by_shift_ids(&shift_ids)
            .await?;
        let helper_ids: Vec<i32> = registrations.iter().map(|r| r.helper_id).collect();
        let helpers = HelperRepository::new(self.db).get_many(&helper_ids).await?;

        let mut helper_ids_by_shift: HashMap<i32, Vec<i32>> = HashMap::new();
        for registration in &registrations {
            helper_ids_by_shift
                .entry(registration.shift_id)
                .or_default()
                .push(registration.helper_id);
        }

        let mut shifts_by_job: HashMap<i32, Vec<RosterShift>> = HashMap::new();
        for shift in shifts {
            let registered = helper_ids_by_shift.remove(&shift.id).unwrap_or_default();

            shifts_by_job
                .entry(shift.job_id)
                .or_default()
                .push(RosterShift {
                    begin: shift.begin,
                    end: shift.end,
                    number: shift.number,
                    // `helpers` is already in name order
                    helpers: helpers
                        .iter()
                        .filter(|helper| registered.contains(&helper.id))
                        .map(RosterHelper::from)
                        .collect(),
                });
        }

        Ok(Roster {
            title: export_filename(event, job),
            created_at: event.created_at,
            jobs: jobs
                .into_iter()
                .map(|job| RosterJob {
                    job_id: job.id,
                    shifts: shifts_by_job.remove(&job.id).unwrap_or_default(),
                    name: job.name,
                })
                .collect(),
        })
    }

    /// Renders the roster into xlsx bytes
    pub async fn export(&self, event: &EventModel, job: Option<&JobModel>) -> Result<Vec<u8>, Error> {
        let roster = self.roster(event, job).await?;

        let bytes = xlsx::render(&roster)?;

        tracing::debug!(
            event_id = event.id,
            jobs = roster.jobs.len(),
            bytes = bytes.len(),
            "Rendered roster export"
        );

        Ok(bytes)
    }
}
