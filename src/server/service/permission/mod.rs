//! Authorization guard for event administration.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{event::EventRepository, event_admin::EventAdminRepository},
    error::{access::AccessError, Error},
    model::db::{EventModel, UserModel},
};

/// Event addressed either by a loaded model or by its slug
#[derive(Clone, Copy, Debug)]
pub enum EventRef<'e> {
    Model(&'e EventModel),
    UrlName(&'e str),
}

impl<'e> From<&'e EventModel> for EventRef<'e> {
    fn from(event: &'e EventModel) -> Self {
        Self::Model(event)
    }
}

impl<'e> From<&'e str> for EventRef<'e> {
    fn from(url_name: &'e str) -> Self {
        Self::UrlName(url_name)
    }
}

/// Whether `actor` may administer an event with the given admin set
pub fn may_administer(actor: Option<&UserModel>, admin_user_ids: &HashSet<i32>) -> bool {
    match actor {
        None => false,
        Some(actor) => actor.is_superuser || admin_user_ids.contains(&actor.id),
    }
}

/// Creating events and agreements is reserved to superusers
pub fn require_superuser(actor: &UserModel) -> Result<(), Error> {
    if actor.is_superuser {
        Ok(())
    } else {
        Err(AccessError::PermissionDenied.into())
    }
}

pub struct PermissionService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionService<'a, C> {
    /// Creates a new instance of [`PermissionService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether `actor` is a superuser or in the admin set of the event
    ///
    /// An unknown slug yields `false` instead of NotFound, anonymous actors always yield
    /// `false`.
    pub async fn can_administer(
        &self,
        actor: Option<&UserModel>,
        event: EventRef<'_>,
    ) -> Result<bool, Error> {
        let Some(actor) = actor else {
            return Ok(false);
        };

        if actor.is_superuser {
            return Ok(true);
        }

        let event_id = match event {
            EventRef::Model(event) => event.id,
            EventRef::UrlName(url_name) => {
                match EventRepository::new(self.db).get_by_url_name(url_name).await? {
                    Some(event) => event.id,
                    None => return Ok(false),
                }
            }
        };

        let admin_user_ids: HashSet<i32> = EventAdminRepository::new(self.db)
            .get_user_ids(event_id)
            .await?
            .into_iter()
            .collect();

        Ok(may_administer(Some(actor), &admin_user_ids))
    }

    /// [`Self::can_administer`] as a guard returning `PermissionDenied`
    pub async fn require_admin(
        &self,
        actor: &UserModel,
        event: EventRef<'_>,
    ) -> Result<(), Error> {
        if self.can_administer(Some(actor), event).await? {
            Ok(())
        } else {
            Err(AccessError::PermissionDenied.into())
        }
    }
}
