use shiftdesk::{
    model::shift::{ShiftDeleteDto, ShiftForm},
    server::controller::admin::shift::{
        create_shift, delete_shift, delete_shift_form, edit_shift, edit_shift_form,
    },
};

use super::*;

/// Expect a job of another event to be not found, whoever asks
#[tokio::test]
async fn job_of_other_event_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    test.event().insert_event("Fair2024", false).await?;
    let other = test.event().insert_event("other", true).await?;
    let setup = test.job().insert_job(other.id, "Setup", 1).await?;
    let shift = test.shift().insert_mock_shift(setup.id, 8, 4).await?;
    login(&test, &root).await;

    let response = edit_shift_form(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!(
            "/api/admin/events/Fair2024/jobs/{}/shifts/{}/edit",
            setup.id, shift.id
        )),
        Path(("Fair2024".to_string(), setup.id, shift.id)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a shift ending before it begins to be rejected
#[tokio::test]
async fn rejects_shift_ending_before_begin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    login(&test, &root).await;

    let response = create_shift(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!("/api/admin/events/fair2024/jobs/{}/shifts/new", job.id)),
        Path(("fair2024".to_string(), job.id)),
        Json(ShiftForm {
            begin: factory::datetime(1, 12),
            end: factory::datetime(1, 10),
            number: 2,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect lowering the wanted number below the registrations to be rejected
#[tokio::test]
async fn rejects_number_below_registrations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 3).await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Bert", "Baker")
        .await?;
    login(&test, &root).await;

    let response = edit_shift(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!(
            "/api/admin/events/fair2024/jobs/{}/shifts/{}/edit",
            job.id, shift.id
        )),
        Path(("fair2024".to_string(), job.id, shift.id)),
        Json(ShiftForm {
            begin: shift.begin,
            end: shift.end,
            number: 1,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect deleting a shift to remove helpers left without registration
#[tokio::test]
async fn delete_shift_removes_registrations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 2).await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;
    login(&test, &root).await;

    let path = format!(
        "/api/admin/events/fair2024/jobs/{}/shifts/{}/delete",
        job.id, shift.id
    );
    let response = delete_shift_form(
        State(test.app_state()),
        test.session.clone(),
        uri(&path),
        Path(("fair2024".to_string(), job.id, shift.id)),
    )
    .await
    .into_response();
    let body: ShiftDeleteDto = json_body(response).await;
    assert!(body.helpers_registered);
    assert_eq!(body.shift.registered, 1);

    let response = delete_shift(
        State(test.app_state()),
        test.session.clone(),
        uri(&path),
        Path(("fair2024".to_string(), job.id, shift.id)),
        Json(DeleteForm { confirm: true }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/admin/events/fair2024/jobs");
    assert!(entity::prelude::Shift::find().all(&test.db).await?.is_empty());
    assert!(entity::prelude::Helper::find().all(&test.db).await?.is_empty());

    Ok(())
}
