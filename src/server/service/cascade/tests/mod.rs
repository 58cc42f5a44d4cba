
use sea_orm::EntityTrait;
use shiftdesk_test_utils::prelude::*;

use super::*;
