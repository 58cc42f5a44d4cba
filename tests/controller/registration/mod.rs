//! Tests for the public registration endpoints.

mod form;
mod index;
mod registered;
mod submit;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest},
    http::Request,
};
use shiftdesk::{
    model::registration::RegisterForm,
    server::controller::registration::{get_form, index, registered, submit_form},
};

use super::*;

fn register_form(shifts: Vec<i32>) -> RegisterForm {
    RegisterForm {
        prename: "Anna".to_string(),
        surname: "Adler".to_string(),
        email: "anna@example.org".to_string(),
        shifts,
        ..Default::default()
    }
}

/// Runs the JSON extractor on a body that is not valid JSON
async fn malformed_body() -> Result<Json<RegisterForm>, JsonRejection> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/events/fair2024/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"prename\": "))
        .unwrap();

    Json::<RegisterForm>::from_request(request, &()).await
}
