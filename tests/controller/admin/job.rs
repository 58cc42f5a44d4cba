use shiftdesk::{
    model::job::{JobDeleteDto, JobForm, JobsAndShiftsDto},
    server::controller::admin::job::{create_job, delete_job, delete_job_form, jobs_and_shifts},
};

use super::*;

/// Expect an admin to create a job and return to the job list
#[tokio::test]
async fn admin_creates_job() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    test.event().insert_admin(event.id, alice.id).await?;
    login(&test, &alice).await;

    let response = create_job(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/jobs/new"),
        Path("fair2024".to_string()),
        Json(JobForm {
            name: "Bar".to_string(),
            description: String::new(),
            position: 1,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/api/admin/events/fair2024/jobs");

    let response = jobs_and_shifts(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/jobs"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    let body: JobsAndShiftsDto = json_body(response).await;
    assert_eq!(body.jobs.len(), 1);
    assert_eq!(body.jobs[0].job.name, "Bar");

    Ok(())
}

/// Expect the delete context to report whether helpers registered
#[tokio::test]
async fn delete_form_reports_helpers_registered() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test.event().insert_event("fair2024", true).await?;
    let empty = test.job().insert_job(event.id, "Empty", 1).await?;
    let busy = test.job().insert_job(event.id, "Busy", 2).await?;
    let shift = test.shift().insert_mock_shift(busy.id, 10, 2).await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;
    login(&test, &root).await;

    for (job, expected) in [(empty, false), (busy, true)] {
        let response = delete_job_form(
            State(test.app_state()),
            test.session.clone(),
            uri(&format!("/api/admin/events/fair2024/jobs/{}/delete", job.id)),
            Path(("fair2024".to_string(), job.id)),
        )
        .await
        .into_response();

        let body: JobDeleteDto = json_body(response).await;
        assert_eq!(body.helpers_registered, expected);
    }

    Ok(())
}

/// Expect deleting a job of another event to be not found
#[tokio::test]
async fn delete_job_of_other_event_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    test.event().insert_event("fair2024", true).await?;
    let other = test.event().insert_event("other", true).await?;
    let job = test.job().insert_job(other.id, "Bar", 1).await?;
    login(&test, &root).await;

    let response = delete_job(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!("/api/admin/events/fair2024/jobs/{}/delete", job.id)),
        Path(("fair2024".to_string(), job.id)),
        Json(DeleteForm { confirm: true }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(entity::prelude::Job::find_by_id(job.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}
