//! Tests for the agreement endpoints.

mod agreements;

use super::*;
