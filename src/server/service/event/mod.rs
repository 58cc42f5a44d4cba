#[cfg(test)]
mod tests;

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        event::{EventDto, EventEditDto, EventForm, EventIndexDto},
        user::UserDto,
    },
    server::{
        data::{
            event::EventRepository, event_admin::EventAdminRepository, helper::HelperRepository,
            user::UserRepository,
        },
        error::{validation::ValidationError, Error},
        model::db::{EventModel, UserModel},
        service::{cascade, validate},
    },
};

/// Event form after validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedEvent {
    pub url_name: String,
    pub name: String,
    pub email: String,
    pub active: bool,
    /// Complete admin set, sorted and without duplicates
    pub admins: Vec<i32>,
}

impl ValidatedEvent {
    /// Field checks that need no database access
    pub fn from_form(form: EventForm) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let url_name = validate::slug(&mut errors, "url_name", &form.url_name);
        let name = validate::required(&mut errors, "name", &form.name, validate::MAX_NAME_LENGTH);
        let email = validate::email(&mut errors, "email", &form.email);

        let mut admins = form.admins;
        admins.sort_unstable();
        admins.dedup();

        errors.into_result(Self {
            url_name,
            name,
            email,
            active: form.active,
            admins,
        })
    }
}

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active events plus the inactive events `actor` administers
    pub async fn index(&self, actor: Option<&UserModel>) -> Result<EventIndexDto, Error> {
        let events = EventRepository::new(self.db).get_all().await?;

        let administered: HashSet<i32> = match actor {
            None => HashSet::new(),
            Some(actor) if actor.is_superuser => events.iter().map(|event| event.id).collect(),
            Some(actor) => EventAdminRepository::new(self.db)
                .get_event_ids(actor.id)
                .await?
                .into_iter()
                .collect(),
        };

        let (active_events, inactive_events): (Vec<EventModel>, Vec<EventModel>) =
            events.into_iter().partition(|event| event.active);

        Ok(EventIndexDto {
            active_events: active_events.into_iter().map(EventDto::from).collect(),
            administered_events: inactive_events
                .into_iter()
                .filter(|event| administered.contains(&event.id))
                .map(EventDto::from)
                .collect(),
        })
    }

    /// Context of the event form, `event` is `None` for a new event
    pub async fn edit_context(&self, event: Option<&EventModel>) -> Result<EventEditDto, Error> {
        let Some(event) = event else {
            return Ok(EventEditDto {
                event: None,
                admins: Vec::new(),
            });
        };

        let admin_ids = EventAdminRepository::new(self.db)
            .get_user_ids(event.id)
            .await?;
        let admins = UserRepository::new(self.db).get_many(&admin_ids).await?;

        Ok(EventEditDto {
            event: Some(EventDto::from(event.clone())),
            admins: admins.into_iter().map(UserDto::from).collect(),
        })
    }

    /// Whether any helper registered for the event
    pub async fn helpers_registered(&self, event: &EventModel) -> Result<bool, Error> {
        Ok(!HelperRepository::new(self.db)
            .get_ids_by_event_id(event.id)
            .await?
            .is_empty())
    }

    /// Validates the form against `existing`, nothing is written
    ///
    /// Besides the field checks the slug must be unused by other events and may not change
    /// once helpers have registered, and every admin must be an existing user.
    pub async fn validate(
        &self,
        form: EventForm,
        existing: Option<&EventModel>,
    ) -> Result<ValidatedEvent, Error> {
        let admins = form.admins.clone();
        let url_name = form.url_name.trim().to_string();

        let (validated, mut errors) = match ValidatedEvent::from_form(form) {
            Ok(validated) => (Some(validated), ValidationError::new()),
            Err(errors) => (None, errors),
        };

        if !errors.has_field("url_name") {
            let taken = EventRepository::new(self.db)
                .url_name_taken(&url_name, existing.map(|event| event.id))
                .await?;

            if taken {
                errors.add("url_name", "Event with this URL name already exists.");
            }

            if let Some(existing) = existing {
                if existing.url_name != url_name && self.helpers_registered(existing).await? {
                    errors.add(
                        "url_name",
                        "The URL name cannot be changed after helpers registered.",
                    );
                }
            }
        }

        let mut admin_ids = admins;
        admin_ids.sort_unstable();
        admin_ids.dedup();
        let known_users = UserRepository::new(self.db).get_many(&admin_ids).await?;
        if known_users.len() != admin_ids.len() {
            errors.add("admins", "Select only existing users.");
        }

        match validated {
            Some(validated) if errors.is_empty() => Ok(validated),
            _ => Err(errors.into()),
        }
    }

    /// Creates a new event or updates `existing`, replacing its admin set
    pub async fn save(
        &self,
        existing: Option<EventModel>,
        event: ValidatedEvent,
    ) -> Result<EventModel, Error> {
        let txn = self.db.begin().await?;

        let event_repo = EventRepository::new(&txn);
        let saved = match existing {
            Some(existing) => {
                event_repo
                    .update(
                        existing,
                        &event.url_name,
                        &event.name,
                        &event.email,
                        event.active,
                    )
                    .await?
            }
            None => {
                event_repo
                    .create(&event.url_name, &event.name, &event.email, event.active)
                    .await?
            }
        };

        EventAdminRepository::new(&txn)
            .replace(saved.id, &event.admins)
            .await?;

        txn.commit().await?;

        tracing::info!(event_id = saved.id, url_name = %saved.url_name, "Saved event");

        Ok(saved)
    }

    /// Deletes the event with its jobs, shifts, helpers and admin memberships
    pub async fn delete(&self, event: &EventModel) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        cascade::delete_event(&txn, event.id).await?;
        txn.commit().await?;

        tracing::info!(event_id = event.id, url_name = %event.url_name, "Deleted event");

        Ok(())
    }
}
