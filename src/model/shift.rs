use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{event::EventDto, job::JobDto};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftDto {
    pub id: i32,
    pub job_id: i32,
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Number of wanted helpers, `0` for no limit
    pub number: i32,
    /// Number of helpers registered so far
    pub registered: u64,
}

impl ShiftDto {
    pub fn new(shift: entity::shift::Model, registered: u64) -> Self {
        Self {
            id: shift.id,
            job_id: shift.job_id,
            begin: shift.begin,
            end: shift.end,
            number: shift.number,
            registered,
        }
    }

    /// Remaining places, `None` when the shift has no limit
    pub fn free(&self) -> Option<u64> {
        if self.number <= 0 {
            return None;
        }

        Some((self.number as u64).saturating_sub(self.registered))
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftForm {
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub number: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftEditDto {
    pub event: EventDto,
    pub job: JobDto,
    pub shift: Option<ShiftDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftDeleteDto {
    pub event: EventDto,
    pub job: JobDto,
    pub shift: ShiftDto,
    /// Whether deleting the shift removes registrations
    pub helpers_registered: bool,
}
