//! Business logic services.
//!
//! Services combine repositories into the operations offered by the HTTP API. Forms are
//! checked by a `validate` step that never writes, persisted by a `save` step, and every
//! delete goes through the routines in [`cascade`] inside a single transaction.

pub mod agreement;
pub mod cascade;
pub mod event;
pub mod export;
pub mod helper;
pub mod hierarchy;
pub mod job;
pub mod notification;
pub mod permission;
pub mod registration;
pub mod shift;
pub mod user;
pub mod validate;
