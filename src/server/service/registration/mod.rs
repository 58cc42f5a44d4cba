//! Public registration of helpers for shifts.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        event::EventDto,
        helper::HelperDto,
        registration::{RegisterForm, RegisteredDto, RegistrationFormDto},
    },
    server::{
        data::{
            helper::{HelperData, HelperRepository},
            helper_shift::HelperShiftRepository,
            job::JobRepository,
            shift::ShiftRepository,
        },
        error::{validation::ValidationError, Error},
        model::db::{EventModel, HelperModel, JobModel, ShiftModel, UserModel},
        service::{
            helper::HelperService,
            job::jobs_with_shifts,
            notification::{notify_registration, HelperNotifier},
            permission::PermissionService,
            validate,
        },
    },
};

/// Who may open the registration form of an event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegistrationAccess {
    Open,
    /// Inactive event and anonymous visitor
    LoginRequired,
    /// Inactive event and a visitor who does not administer it
    Denied,
}

/// Registration form after validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedRegistration {
    pub prename: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
    /// Selected shifts, ordered by begin
    pub shifts: Vec<ShiftModel>,
}

impl ValidatedRegistration {
    fn data(&self) -> HelperData<'_> {
        HelperData {
            prename: &self.prename,
            surname: &self.surname,
            email: &self.email,
            phone: &self.phone,
            comment: &self.comment,
        }
    }
}

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn HelperNotifier,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn HelperNotifier) -> Self {
        Self { db, notifier }
    }

    /// Active events are open to anyone, inactive ones only to their admins
    pub async fn access(
        &self,
        event: &EventModel,
        actor: Option<&UserModel>,
    ) -> Result<RegistrationAccess, Error> {
        if event.active {
            return Ok(RegistrationAccess::Open);
        }

        let Some(actor) = actor else {
            return Ok(RegistrationAccess::LoginRequired);
        };

        let permission = PermissionService::new(self.db);
        if permission.can_administer(Some(actor), event.into()).await? {
            Ok(RegistrationAccess::Open)
        } else {
            Ok(RegistrationAccess::Denied)
        }
    }

    /// Event with its jobs and shifts to choose from
    pub async fn form(&self, event: &EventModel) -> Result<RegistrationFormDto, Error> {
        Ok(RegistrationFormDto {
            jobs: jobs_with_shifts(self.db, event.id).await?,
            event: EventDto::from(event.clone()),
        })
    }

    /// Validates the form, nothing is written
    ///
    /// Every selected shift must exist, belong to the event and be selected only once.
    pub async fn validate(
        &self,
        event: &EventModel,
        form: RegisterForm,
    ) -> Result<ValidatedRegistration, Error> {
        let mut errors = ValidationError::new();

        let prename = validate::required(
            &mut errors,
            "prename",
            &form.prename,
            validate::MAX_NAME_LENGTH,
        );
        let surname = validate::required(
            &mut errors,
            "surname",
            &form.surname,
            validate::MAX_NAME_LENGTH,
        );
        let email = validate::email(&mut errors, "email", &form.email);
        let phone = validate::optional(&mut errors, "phone", &form.phone, validate::MAX_PHONE_LENGTH);

        let mut shift_ids = form.shifts;
        shift_ids.sort_unstable();
        let selected = shift_ids.len();
        shift_ids.dedup();

        let mut shifts = Vec::new();
        if shift_ids.is_empty() {
            errors.add("shifts", "Select at least one shift.");
        } else if shift_ids.len() != selected {
            errors.add("shifts", "Select every shift only once.");
        } else {
            let event_job_ids: Vec<i32> = JobRepository::new(self.db)
                .get_many_by_event_id(event.id)
                .await?
                .into_iter()
                .map(|job| job.id)
                .collect();

            shifts = ShiftRepository::new(self.db).get_many(&shift_ids).await?;

            let all_of_event = shifts.len() == shift_ids.len()
                && shifts
                    .iter()
                    .all(|shift| event_job_ids.contains(&shift.job_id));

            if !all_of_event {
                errors.add("shifts", "Select only shifts of this event.");
            }
        }

        Ok(errors.into_result(ValidatedRegistration {
            prename,
            surname,
            email,
            phone,
            comment: form.comment.trim().to_string(),
            shifts,
        })?)
    }

    /// Stores the helper and the registrations, then sends the confirmation
    ///
    /// Each shift with a limit is locked and checked for free places inside the transaction,
    /// a full shift rolls back the whole registration. A failing confirmation is logged and
    /// does not affect the stored registration.
    pub async fn register(
        &self,
        event: &EventModel,
        registration: ValidatedRegistration,
    ) -> Result<HelperModel, Error> {
        let txn = self.db.begin().await?;

        let helper = HelperRepository::new(&txn)
            .create(event.id, registration.data())
            .await?;

        let shift_repo = ShiftRepository::new(&txn);
        let registration_repo = HelperShiftRepository::new(&txn);
        let mut errors = ValidationError::new();

        for selected in &registration.shifts {
            let Some(shift) = shift_repo.get_for_update(selected.id).await? else {
                errors.add("shifts", "A selected shift no longer exists.");
                continue;
            };

            if shift.number > 0 {
                let registered = registration_repo.count_by_shift_id(shift.id).await?;

                if registered >= shift.number as u64 {
                    errors.add(
                        "shifts",
                        format!(
                            "The shift starting {} is already full.",
                            shift.begin.format("%Y-%m-%d %H:%M")
                        ),
                    );
                    continue;
                }
            }

            registration_repo.create(helper.id, shift.id).await?;
        }

        if !errors.is_empty() {
            txn.rollback().await?;

            return Err(errors.into());
        }

        // Loaded before commit so nothing after persistence can fail the request
        let jobs: HashMap<i32, JobModel> = JobRepository::new(&txn)
            .get_many_by_event_id(event.id)
            .await?
            .into_iter()
            .map(|job| (job.id, job))
            .collect();
        let shifts: Vec<(JobModel, ShiftModel)> = registration
            .shifts
            .iter()
            .filter_map(|shift| {
                jobs.get(&shift.job_id)
                    .cloned()
                    .map(|job| (job, shift.clone()))
            })
            .collect();

        txn.commit().await?;

        tracing::info!(
            event_id = event.id,
            helper_id = helper.id,
            shifts = registration.shifts.len(),
            "Registered helper"
        );

        notify_registration(self.notifier, event, &helper, &shifts).await;

        Ok(helper)
    }

    /// Confirmation page of a registered helper
    pub async fn registered(
        &self,
        event: &EventModel,
        helper: &HelperModel,
    ) -> Result<RegisteredDto, Error> {
        let helper_service = HelperService::new(self.db);
        let shifts = helper_service.shifts_of(helper).await?;

        Ok(RegisteredDto {
            event: EventDto::from(event.clone()),
            helper: HelperDto::from(helper.clone()),
            shifts: helper_service.shift_dtos(shifts).await?,
        })
    }
}
