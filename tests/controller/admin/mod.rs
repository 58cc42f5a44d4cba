//! Tests for the admin endpoints.

mod event;
mod export;
mod helper;
mod job;
mod shift;

use sea_orm::EntityTrait;

use super::*;
