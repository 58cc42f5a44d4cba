use shiftdesk::{
    model::helper::{HelperDeleteForm, HelperForm, JobHelpersDto},
    server::controller::admin::helper::{delete_helper, edit_helper, job_helpers},
};

use super::*;

/// Expect removing one of two shifts to keep the helper
#[tokio::test]
async fn removes_helper_from_selected_shift() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let early = test.shift().insert_mock_shift(job.id, 10, 2).await?;
    let late = test.shift().insert_mock_shift(job.id, 14, 2).await?;
    let helper = test
        .helper()
        .insert_helper_for_shift(event.id, early.id, "Anna", "Adler")
        .await?;
    test.helper().register(helper.id, late.id).await?;
    login(&test, &root).await;

    let response = delete_helper(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!(
            "/api/admin/events/fair2024/jobs/{}/helpers/{}/delete",
            job.id, helper.id
        )),
        Path(("fair2024".to_string(), job.id, helper.id)),
        Json(HelperDeleteForm {
            confirm: true,
            shifts: Some(vec![early.id]),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("/api/admin/events/fair2024/jobs/{}/helpers", job.id)
    );

    let response = job_helpers(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!("/api/admin/events/fair2024/jobs/{}/helpers", job.id)),
        Path(("fair2024".to_string(), job.id)),
    )
    .await
    .into_response();
    let body: JobHelpersDto = json_body(response).await;
    assert!(body.shifts[0].helpers.is_empty());
    assert_eq!(body.shifts[1].helpers[0].id, helper.id);

    Ok(())
}

/// Expect an unconfirmed removal to keep every registration
#[tokio::test]
async fn unconfirmed_removal_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 2).await?;
    let helper = test
        .helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;
    login(&test, &root).await;

    let response = delete_helper(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!(
            "/api/admin/events/fair2024/jobs/{}/helpers/{}/delete",
            job.id, helper.id
        )),
        Path(("fair2024".to_string(), job.id, helper.id)),
        Json(HelperDeleteForm::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(entity::prelude::Helper::find_by_id(helper.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Expect a helper not registered within the job to be not found
#[tokio::test]
async fn helper_outside_job_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let bar = test.job().insert_job(event.id, "Bar", 1).await?;
    let kitchen = test.job().insert_job(event.id, "Kitchen", 2).await?;
    let shift = test.shift().insert_mock_shift(kitchen.id, 10, 2).await?;
    let helper = test
        .helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;
    login(&test, &root).await;

    let response = delete_helper(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!(
            "/api/admin/events/fair2024/jobs/{}/helpers/{}/delete",
            bar.id, helper.id
        )),
        Path(("fair2024".to_string(), bar.id, helper.id)),
        Json(HelperDeleteForm {
            confirm: true,
            shifts: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an edited helper to be stored and redirect to the helper overview
#[tokio::test]
async fn edits_helper() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let helper = test.helper().insert_helper(event.id, "Anna", "Adler").await?;
    login(&test, &root).await;

    let response = edit_helper(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!("/api/admin/events/fair2024/helpers/{}/edit", helper.id)),
        Path(("fair2024".to_string(), helper.id)),
        Json(HelperForm {
            prename: "Anna".to_string(),
            surname: "Berger".to_string(),
            email: "anna@example.org".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/admin/events/fair2024/helpers");

    let saved = entity::prelude::Helper::find_by_id(helper.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(saved.surname, "Berger");

    Ok(())
}
