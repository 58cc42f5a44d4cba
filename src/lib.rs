//! Volunteer registration and shift management for events.

pub mod model;
pub mod server;
