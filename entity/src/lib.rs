//! SeaORM entities for the shiftdesk schema.

pub mod prelude;

pub mod agreement;
pub mod app_user;
pub mod event;
pub mod event_admin;
pub mod helper;
pub mod helper_shift;
pub mod job;
pub mod shift;
pub mod user_agreement;
