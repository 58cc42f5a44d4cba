pub use super::agreement::Entity as Agreement;
pub use super::app_user::Entity as AppUser;
pub use super::event::Entity as Event;
pub use super::event_admin::Entity as EventAdmin;
pub use super::helper::Entity as Helper;
pub use super::helper_shift::Entity as HelperShift;
pub use super::job::Entity as Job;
pub use super::shift::Entity as Shift;
pub use super::user_agreement::Entity as UserAgreement;
