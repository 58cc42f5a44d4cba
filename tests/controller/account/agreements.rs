use chrono::{Duration, Utc};
use shiftdesk::{
    model::agreement::{AgreementDto, AgreementForm, UserAgreementDto},
    server::controller::{
        account::{agree, agreements},
        admin::create_agreement,
    },
};

use super::*;

/// Expect anonymous requests to be redirected to the login page
#[tokio::test]
async fn anonymous_redirected_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;

    let response = agreements(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/account/agreements"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/login?next=%2Fapi%2Faccount%2Fagreements"
    );

    Ok(())
}

/// Expect an accepted agreement to leave the pending list and keep its first timestamp
#[tokio::test]
async fn agree_twice_keeps_first_timestamp() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let yesterday = (Utc::now() - Duration::days(1)).date_naive();
    let privacy = test
        .agreement()
        .insert_agreement("Privacy", yesterday)
        .await?;
    login(&test, &alice).await;

    let response = agreements(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/account/agreements"),
    )
    .await
    .into_response();
    let pending: Vec<AgreementDto> = json_body(response).await;
    assert_eq!(pending.len(), 1);

    let path = format!("/api/account/agreements/{}/agree", privacy.id);
    let first: UserAgreementDto = json_body(
        agree(
            State(test.app_state()),
            test.session.clone(),
            uri(&path),
            Path(privacy.id),
        )
        .await
        .into_response(),
    )
    .await;
    let second: UserAgreementDto = json_body(
        agree(
            State(test.app_state()),
            test.session.clone(),
            uri(&path),
            Path(privacy.id),
        )
        .await
        .into_response(),
    )
    .await;

    assert!(first.agreed.is_some());
    assert_eq!(first.agreed, second.agreed);

    let response = agreements(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/account/agreements"),
    )
    .await
    .into_response();
    let pending: Vec<AgreementDto> = json_body(response).await;
    assert!(pending.is_empty());

    Ok(())
}

/// Expect only superusers to create agreements
#[tokio::test]
async fn create_agreement_requires_superuser() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    login(&test, &alice).await;

    let response = create_agreement(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/agreements"),
        Json(AgreementForm {
            name: "Privacy".to_string(),
            text: "<p>We keep your data.</p>".to_string(),
            begin: factory::date(3, 1),
        }),
    )
    .await
    .into_response();

    assert_no_permission(response).await;

    Ok(())
}

/// Expect a superuser to create an agreement
#[tokio::test]
async fn superuser_creates_agreement() -> Result<(), TestError> {
    let test = TestBuilder::new().with_agreement_tables().build().await?;
    let root = test.user().insert_superuser("root").await?;
    login(&test, &root).await;

    let response = create_agreement(
        State(test.app_state()),
        test.session.clone(),
        uri("/api/admin/agreements"),
        Json(AgreementForm {
            name: "Privacy".to_string(),
            text: "<p>We keep your data.</p>".to_string(),
            begin: factory::date(3, 1),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: AgreementDto = json_body(response).await;
    assert_eq!(body.name, "Privacy");

    Ok(())
}
