//! Request and response types of the HTTP API.
//!
//! Forms are deserialized from request bodies, DTOs are serialized into responses. Both are
//! registered with utoipa so they appear in the generated OpenAPI document.

pub mod agreement;
pub mod api;
pub mod event;
pub mod helper;
pub mod job;
pub mod registration;
pub mod shift;
pub mod user;
