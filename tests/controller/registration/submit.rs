use std::sync::Arc;

use sea_orm::EntityTrait;
use shiftdesk::{
    model::api::ValidationErrorDto,
    server::service::notification::LogNotifier,
};

use super::*;

/// Expect a valid registration to redirect to its confirmation
#[tokio::test]
async fn registers_and_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 2).await?;

    let response = submit_form(
        State(test.app_state_with_notifier(Arc::new(LogNotifier))),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
        Ok(Json(register_form(vec![shift.id]))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response).to_string();
    assert!(target.starts_with("/api/events/fair2024/registered/"));

    let helper_id: i32 = target
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
        .unwrap();
    let helper = entity::prelude::Helper::find_by_id(helper_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(helper.surname, "Adler");

    Ok(())
}

/// Expect 422 with a `shifts` error when no shift is selected
#[tokio::test]
async fn rejects_registration_without_shifts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", true).await?;

    let response = submit_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
        Ok(Json(register_form(Vec::new()))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ValidationErrorDto = json_body(response).await;
    assert!(body.errors.contains_key("shifts"));

    Ok(())
}

/// Expect a full shift to reject the registration without storing a helper
#[tokio::test]
async fn rejects_full_shift() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 1).await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Bert", "Baker")
        .await?;

    let response = submit_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
        Ok(Json(register_form(vec![shift.id]))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let helpers = entity::prelude::Helper::find().all(&test.db).await?;
    assert_eq!(helpers.len(), 1);

    Ok(())
}

/// Expect a shift of another event to be rejected
#[tokio::test]
async fn rejects_shift_of_other_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", true).await?;
    let other = test.event().insert_event("other", true).await?;
    let job = test.job().insert_job(other.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 0).await?;

    let response = submit_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
        Ok(Json(register_form(vec![shift.id]))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect anonymous posts to an inactive event to be redirected before the body is read
#[tokio::test]
async fn inactive_event_redirects_before_body_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", false).await?;

    let response = submit_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
        malformed_body().await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/login?next=%2Fapi%2Fevents%2Ffair2024%2Fregister"
    );

    Ok(())
}

/// Expect a malformed body for an open event to be rejected without storing anything
#[tokio::test]
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", true).await?;

    let response = submit_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
        malformed_body().await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(entity::prelude::Helper::find().all(&test.db).await?.is_empty());

    Ok(())
}
