//! Type aliases for the database models of the `entity` crate.

/// Account managed by the external authentication, see [`entity::app_user::Model`]
pub type UserModel = entity::app_user::Model;

pub type EventModel = entity::event::Model;

/// Row of the event to admin relation
pub type EventAdminModel = entity::event_admin::Model;

pub type JobModel = entity::job::Model;

pub type ShiftModel = entity::shift::Model;

/// Volunteer registered for one event, only exists while registered for at least one shift
pub type HelperModel = entity::helper::Model;

/// Registration of a helper for one shift
pub type HelperShiftModel = entity::helper_shift::Model;

pub type AgreementModel = entity::agreement::Model;

pub type UserAgreementModel = entity::user_agreement::Model;
