use shiftdesk::model::registration::RegistrationFormDto;

use super::*;

/// Expect the form of an active event to list jobs with shifts and free places
#[tokio::test]
async fn returns_form_of_active_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 2).await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Bert", "Baker")
        .await?;

    let response = get_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: RegistrationFormDto = json_body(response).await;
    assert_eq!(body.jobs.len(), 1);
    assert_eq!(body.jobs[0].shifts[0].registered, 1);
    assert_eq!(body.jobs[0].shifts[0].free(), Some(1));

    Ok(())
}

/// Expect anonymous visitors of an inactive event to be sent to the login page
#[tokio::test]
async fn redirects_anonymous_to_login_for_inactive_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", false).await?;

    let response = get_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
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

/// Expect the no-permission notice for a non-admin on an inactive event
#[tokio::test]
async fn denies_non_admin_for_inactive_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    test.event().insert_event("fair2024", false).await?;
    login(&test, &alice).await;

    let response = get_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    assert_no_permission(response).await;

    Ok(())
}

/// Expect admins to open the form of their inactive event
#[tokio::test]
async fn allows_admin_for_inactive_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let event = test.event().insert_event("fair2024", false).await?;
    test.event().insert_admin(event.id, alice.id).await?;
    login(&test, &alice).await;

    let response = get_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/fair2024/register"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: RegistrationFormDto = json_body(response).await;
    assert_eq!(body.event.id, event.id);

    Ok(())
}

/// Expect 404 for an unknown event
#[tokio::test]
async fn returns_not_found_for_unknown_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;

    let response = get_form(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/events/nope/register"),
        Path("nope".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
