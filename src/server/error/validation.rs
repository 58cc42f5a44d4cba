use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Field errors of a rejected form, keyed by field name
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Submitted form is invalid: {errors:?}")]
pub struct ValidationError {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error with a single message for `field`
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.add(field, message);
        error
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// `Ok(value)` when no error was collected
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto {
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
