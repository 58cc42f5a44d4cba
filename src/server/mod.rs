//! Server application core modules.
//!
//! HTTP routing and handlers, configuration, persistence through sea-orm repositories and the
//! services implementing event administration, helper registration and roster export.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
