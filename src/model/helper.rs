use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{event::EventDto, job::JobDto, shift::ShiftDto};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct HelperDto {
    pub id: i32,
    pub event_id: i32,
    pub prename: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::helper::Model> for HelperDto {
    fn from(helper: entity::helper::Model) -> Self {
        Self {
            id: helper.id,
            event_id: helper.event_id,
            prename: helper.prename,
            surname: helper.surname,
            email: helper.email,
            phone: helper.phone,
            comment: helper.comment,
            created_at: helper.created_at,
        }
    }
}

/// Submitted by admins when editing a helper's personal data
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HelperForm {
    pub prename: String,
    pub surname: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub comment: String,
}

/// Submitted when removing a helper from shifts of one job
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HelperDeleteForm {
    #[serde(default)]
    pub confirm: bool,
    /// Shift IDs to unregister from, all of the helper's shifts in the job when absent
    #[serde(default)]
    pub shifts: Option<Vec<i32>>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct HelperEditDto {
    pub event: EventDto,
    pub helper: HelperDto,
    pub shifts: Vec<ShiftDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct HelperDeleteDto {
    pub event: EventDto,
    pub job: JobDto,
    pub helper: HelperDto,
    /// The helper's shifts within the job
    pub shifts: Vec<ShiftDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobHelperCountDto {
    pub job: JobDto,
    /// Distinct helpers registered for any shift of the job
    pub helpers: u64,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct HelpersDto {
    pub event: EventDto,
    pub jobs: Vec<JobHelperCountDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftHelpersDto {
    pub shift: ShiftDto,
    pub helpers: Vec<HelperDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobHelpersDto {
    pub event: EventDto,
    pub job: JobDto,
    pub shifts: Vec<ShiftHelpersDto>,
}
