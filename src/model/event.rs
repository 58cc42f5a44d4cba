use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub url_name: String,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            url_name: event.url_name,
            name: event.name,
            email: event.email,
            active: event.active,
            created_at: event.created_at,
        }
    }
}

/// Submitted when creating or editing an event
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EventForm {
    pub url_name: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub active: bool,
    /// User IDs forming the complete admin set of the event
    #[serde(default)]
    pub admins: Vec<i32>,
}

/// Public start page
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct EventIndexDto {
    /// Events open for registration
    pub active_events: Vec<EventDto>,
    /// Inactive events the current user administers
    pub administered_events: Vec<EventDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminIndexDto {
    pub event: Option<EventDto>,
}

/// Context of the event form, `event` is absent when creating a new event
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct EventEditDto {
    pub event: Option<EventDto>,
    pub admins: Vec<UserDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDeleteDto {
    pub event: EventDto,
    pub helpers_registered: bool,
}
