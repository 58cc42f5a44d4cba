use shiftdesk::model::registration::RegisteredDto;

use super::*;

/// Expect the confirmation to list the helper's shifts
#[tokio::test]
async fn returns_registered_helper() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 2).await?;
    let helper = test
        .helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;

    let response = registered(
        State(test.app_state()),
        Path(("fair2024".to_string(), helper.id)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: RegisteredDto = json_body(response).await;
    assert_eq!(body.helper.id, helper.id);
    assert_eq!(body.shifts.len(), 1);
    assert_eq!(body.shifts[0].id, shift.id);

    Ok(())
}

/// Expect 404 for a helper of another event
#[tokio::test]
async fn returns_not_found_for_helper_of_other_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    test.event().insert_event("fair2024", true).await?;
    let other = test.event().insert_event("other", true).await?;
    let helper = test.helper().insert_helper(other.id, "Anna", "Adler").await?;

    let response = registered(
        State(test.app_state()),
        Path(("fair2024".to_string(), helper.id)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
