use shiftdesk::model::event::EventIndexDto;

use super::*;

/// Expect anonymous visitors to see active events only
#[tokio::test]
async fn lists_active_events_for_anonymous() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", true).await?;
    test.event().insert_event("draft", false).await?;

    let response = index(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: EventIndexDto = json_body(response).await;
    assert_eq!(body.active_events.len(), 1);
    assert_eq!(body.active_events[0].url_name, "fair2024");
    assert!(body.administered_events.is_empty());

    Ok(())
}

/// Expect admins to additionally see their inactive events
#[tokio::test]
async fn lists_administered_inactive_events() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let draft = test.event().insert_event("draft", false).await?;
    test.event().insert_event("other", false).await?;
    test.event().insert_admin(draft.id, alice.id).await?;
    login(&test, &alice).await;

    let response = index(State(test.app_state()), test.session.clone())
        .await
        .into_response();

    let body: EventIndexDto = json_body(response).await;
    assert_eq!(body.administered_events.len(), 1);
    assert_eq!(body.administered_events[0].id, draft.id);

    Ok(())
}
