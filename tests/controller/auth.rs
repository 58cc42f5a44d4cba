use shiftdesk::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect 303 redirect to the start page after logout with a user in session
#[tokio::test]
async fn returns_redirect_on_logout_with_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_registration_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    login(&test, &alice).await;

    let response = logout(test.session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 303 redirect after logout even without session data
///
/// Clearing an empty session would fail, the handler only clears when a user is present.
#[tokio::test]
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = logout(test.session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    Ok(())
}
