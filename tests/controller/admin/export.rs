use axum::body::to_bytes;
use shiftdesk::server::controller::admin::export::{export_event, export_job};

use super::*;

/// Expect the event export to be offered as xlsx attachment named after the event
#[tokio::test]
async fn exports_event_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test
        .event()
        .insert_named_event("fair2024", "Summer Fair", true)
        .await?;
    let job = test.job().insert_job(event.id, "Bar", 1).await?;
    let shift = test.shift().insert_mock_shift(job.id, 10, 2).await?;
    test.helper()
        .insert_helper_for_shift(event.id, shift.id, "Anna", "Adler")
        .await?;
    login(&test, &root).await;

    let response = export_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/excel"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Summer Fair.xlsx\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"PK"));

    Ok(())
}

/// Expect the job export file name to contain the job name
#[tokio::test]
async fn exports_job_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    let event = test
        .event()
        .insert_named_event("fair2024", "Summer Fair", true)
        .await?;
    let job = test.job().insert_job(event.id, "Bar/Drinks", 1).await?;
    login(&test, &root).await;

    let response = export_job(
        State(test.app_state()),
        test.session.clone(),
        uri(&format!("/api/admin/events/fair2024/jobs/{}/excel", job.id)),
        Path(("fair2024".to_string(), job.id)),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Summer Fair - BarDrinks.xlsx\""
    );

    Ok(())
}

/// Expect non-admins to get the no-permission notice instead of a file
#[tokio::test]
async fn export_requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    test.event().insert_event("fair2024", true).await?;
    login(&test, &alice).await;

    let response = export_event(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/events/fair2024/excel"),
        Path("fair2024".to_string()),
    )
    .await
    .into_response();

    assert_no_permission(response).await;

    Ok(())
}
