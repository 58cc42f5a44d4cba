use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{event::EventDto, helper::HelperDto, job::JobWithShiftsDto, shift::ShiftDto};

/// Public registration form
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterForm {
    pub prename: String,
    pub surname: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub comment: String,
    /// IDs of the shifts to register for
    #[serde(default)]
    pub shifts: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationFormDto {
    pub event: EventDto,
    pub jobs: Vec<JobWithShiftsDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredDto {
    pub event: EventDto,
    pub helper: HelperDto,
    pub shifts: Vec<ShiftDto>,
}
