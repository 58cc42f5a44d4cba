//! Small helpers without database or HTTP dependencies.

pub mod filename;
