use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{event::EventDto, shift::ShiftDto};

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobDto {
    pub id: i32,
    pub event_id: i32,
    pub name: String,
    pub description: String,
    pub position: i32,
}

impl From<entity::job::Model> for JobDto {
    fn from(job: entity::job::Model) -> Self {
        Self {
            id: job.id,
            event_id: job.event_id,
            name: job.name,
            description: job.description,
            position: job.position,
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct JobForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: i32,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobWithShiftsDto {
    pub job: JobDto,
    pub shifts: Vec<ShiftDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobsAndShiftsDto {
    pub event: EventDto,
    pub jobs: Vec<JobWithShiftsDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobEditDto {
    pub event: EventDto,
    pub job: Option<JobDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct JobDeleteDto {
    pub event: EventDto,
    pub job: JobDto,
    /// Whether any shift of the job has registered helpers
    pub helpers_registered: bool,
}
