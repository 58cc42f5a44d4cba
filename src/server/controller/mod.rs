//! HTTP controller endpoints of the shiftdesk API.
//!
//! Handlers resolve the acting user from the session, delegate to the services and turn
//! their results into JSON responses or redirects. Errors are converted by the
//! `IntoResponse` implementation of [`crate::server::error::Error`].

pub mod account;
pub mod admin;
pub mod auth;
pub mod registration;
pub mod util;
