//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run on a
//! plain connection or inside a transaction opened by a service.

pub mod agreement;
pub mod event;
pub mod event_admin;
pub mod helper;
pub mod helper_shift;
pub mod job;
pub mod shift;
pub mod user;
