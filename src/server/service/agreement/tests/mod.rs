mod agree;
mod pending;

use shiftdesk_test_utils::prelude::*;

use super::*;
