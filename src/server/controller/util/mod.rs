//! Utility functions for controller request handling.
//!
//! Resolving the acting user from the session, the shared guard of every admin handler and
//! the canonical paths handlers redirect to.

pub mod actor;
pub mod admin;
pub mod path;
