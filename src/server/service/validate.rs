//! Field checks shared by the form validations of the services.

use crate::server::error::validation::ValidationError;

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_PHONE_LENGTH: usize = 40;

/// Trimmed value of a required text field, records an error when empty or too long
pub fn required(errors: &mut ValidationError, field: &str, value: &str, max_len: usize) -> String {
    let value = value.trim();

    if value.is_empty() {
        errors.add(field, "This field is required.");
    } else if value.chars().count() > max_len {
        errors.add(
            field,
            format!("Ensure this value has at most {} characters.", max_len),
        );
    }

    value.to_string()
}

/// Trimmed value of an optional text field
pub fn optional(errors: &mut ValidationError, field: &str, value: &str, max_len: usize) -> String {
    let value = value.trim();

    if value.chars().count() > max_len {
        errors.add(
            field,
            format!("Ensure this value has at most {} characters.", max_len),
        );
    }

    value.to_string()
}

/// Trimmed e-mail address, records an error unless it looks like `local@domain.tld`
pub fn email(errors: &mut ValidationError, field: &str, value: &str) -> String {
    let value = value.trim();

    if value.is_empty() {
        errors.add(field, "This field is required.");
    } else if !is_email(value) {
        errors.add(field, "Enter a valid email address.");
    }

    value.to_string()
}

/// ASCII letters, digits, `-` and `_`, usable as a URL path segment
pub fn slug(errors: &mut ValidationError, field: &str, value: &str) -> String {
    let value = required(errors, field, value, MAX_NAME_LENGTH);

    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !value.is_empty() && !valid {
        errors.add(
            field,
            "Use only letters, numbers, hyphens and underscores.",
        );
    }

    value
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
