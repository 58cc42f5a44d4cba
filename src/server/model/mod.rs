//! Server-side models.
//!
//! Application state shared by all handlers, aliases for the database models and typed
//! wrappers around session data.

pub mod app;
pub mod db;
pub mod session;
