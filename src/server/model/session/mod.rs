//! Typed wrappers for data stored in the tower-sessions session.
//!
//! Authentication itself happens outside of shiftdesk. The login page stores the ID of the
//! authenticated user in the session, handlers only read it.

pub mod user;
