
use shiftdesk_test_utils::prelude::*;

use super::*;

fn form(url_name: &str) -> EventForm {
    EventForm {
        url_name: url_name.to_string(),
        name: "Summer Fair".to_string(),
        email: "fair@example.org".to_string(),
        active: true,
        admins: Vec::new(),
    }
}
