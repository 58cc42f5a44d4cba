use shiftdesk::{
    model::{
        api::ValidationErrorDto,
        event::{EventDeleteDto, EventForm},
    },
    server::controller::admin::{
        admin_event,
        event::{create_event, delete_event, delete_event_form, edit_event, edit_event_form},
    },
};

use super::*;

fn event_form(url_name: &str) -> EventForm {
    EventForm {
        url_name: url_name.to_string(),
        name: "Summer Fair".to_string(),
        email: "fair@example.org".to_string(),
        active: true,
        admins: Vec::new(),
    }
}

/// Expect a superuser to create an event and land on its edit view
#[tokio::test]
async fn superuser_creates_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    login(&test, &root).await;

    let response = create_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/new"),
        Json(event_form("Fair2024")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/admin/events/Fair2024/edit");

    Ok(())
}

/// Expect regular users to get the no-permission notice when creating events
#[tokio::test]
async fn regular_user_cannot_create_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    login(&test, &alice).await;

    let response = create_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/new"),
        Json(event_form("Fair2024")),
    )
    .await
    .into_response();

    assert_no_permission(response).await;
    assert!(entity::prelude::Event::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect anonymous requests to be redirected to the login page
#[tokio::test]
async fn anonymous_redirected_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", true).await?;

    let response = edit_event_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/edit"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/login?next=%2Fapi%2Fadmin%2Fevents%2Ffair2024%2Fedit"
    );

    Ok(())
}

/// Expect an unknown slug to yield the no-permission notice for non-superusers
#[tokio::test]
async fn unknown_event_is_no_permission_for_regular_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    login(&test, &alice).await;

    let response = admin_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/nope"),
        Path("nope".to_string()),
    )
    .await
    .into_response();

    assert_no_permission(response).await;

    Ok(())
}

/// Expect an unknown slug to be not found for superusers
#[tokio::test]
async fn unknown_event_is_not_found_for_superuser() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    login(&test, &root).await;

    let response = admin_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/nope"),
        Path("nope".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an event admin to rename the event and follow the new slug
#[tokio::test]
async fn admin_edits_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let event = test.event().insert_event("fair2024", false).await?;
    test.event().insert_admin(event.id, alice.id).await?;
    login(&test, &alice).await;

    let mut form = event_form("fair2025");
    form.admins = vec![alice.id];
    let response = edit_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/edit"),
        Path("fair2024".to_string()),
        Json(form),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/admin/events/fair2025/edit");

    Ok(())
}

/// Expect an invalid form to be rejected with field errors
#[tokio::test]
async fn rejects_invalid_event_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    test.event().insert_event("fair2024", true).await?;
    login(&test, &root).await;

    let mut form = event_form("fair2024");
    form.email = "not an address".to_string();
    let response = create_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/new"),
        Json(form),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ValidationErrorDto = json_body(response).await;
    assert!(body.errors.contains_key("url_name"));
    assert!(body.errors.contains_key("email"));

    Ok(())
}

/// Expect the delete context to report registered helpers
#[tokio::test]
async fn delete_form_reports_registered_helpers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    test.helper().insert_helper(event.id, "Anna", "Adler").await?;
    login(&test, &root).await;

    let response = delete_event_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/delete"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    let body: EventDeleteDto = json_body(response).await;
    assert!(body.helpers_registered);

    Ok(())
}

/// Expect an unconfirmed delete to keep the event
#[tokio::test]
async fn unconfirmed_delete_keeps_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    test.event().insert_event("fair2024", true).await?;
    login(&test, &root).await;

    let response = delete_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/delete"),
        Path("fair2024".to_string()),
        Json(DeleteForm::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(entity::prelude::Event::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Expect a confirmed delete to remove the event and redirect to the event list
#[tokio::test]
async fn confirmed_delete_removes_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 2).await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;
    login(&test, &root).await;

    let response = delete_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/delete"),
        Path("fair2024".to_string()),
        Json(DeleteForm { confirm: true }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/events");
    assert!(entity::prelude::Event::find().all(&test.db).await?.is_empty());
    assert!(entity::prelude::Helper::find().all(&test.db).await?.is_empty());

    Ok(())
}
