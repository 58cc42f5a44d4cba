//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, responses are checked for status
//! codes, redirect targets, headers and JSON bodies.

mod account;
mod admin;
mod auth;
mod registration;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shiftdesk::{
    model::api::{DeleteForm, ErrorDto},
    server::error::access::NO_PERMISSION_MESSAGE,
};
use shiftdesk_test_utils::prelude::*;

use crate::util::{json_body, login, uri, TestContextExt};

/// Location header of a redirect response
fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Asserts the 200 no-permission notice
async fn assert_no_permission(response: Response) {
    assert_eq!(response.status(), StatusCode::OK);

    let body: ErrorDto = json_body(response).await;
    assert_eq!(body.error, NO_PERMISSION_MESSAGE);
}
