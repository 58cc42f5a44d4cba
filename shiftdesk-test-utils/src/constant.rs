//! Constant values shared by fixtures and tests.

/// Login page used by test application states.
pub static TEST_LOGIN_URL: &str = "/login";

/// Contact address given to fixture events.
pub static TEST_EVENT_EMAIL: &str = "orga@example.com";

/// Domain used for fixture user and helper e-mail addresses.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";
