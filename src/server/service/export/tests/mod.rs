
use shiftdesk_test_utils::prelude::*;

use super::*;
