//! Test utilities for calling handlers directly.

use std::sync::Arc;

use axum::{body::to_bytes, extract::OriginalUri, response::Response};
use serde::de::DeserializeOwned;
use shiftdesk::server::{
    config::DEFAULT_LOGIN_URL,
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
    service::notification::HelperNotifier,
};
use shiftdesk_test_utils::TestContext;

/// Extension trait for TestContext to create the AppState handlers expect
pub trait TestContextExt {
    fn app_state(&self) -> AppState;

    fn app_state_with_notifier(&self, notifier: Arc<dyn HelperNotifier>) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn app_state_with_notifier(&self, notifier: Arc<dyn HelperNotifier>) -> AppState {
        AppState::new(self.db.clone(), notifier, DEFAULT_LOGIN_URL)
    }
}

/// Puts `user` into the test session
pub async fn login(test: &TestContext, user: &UserModel) {
    SessionUserId::insert(&test.session, user.id)
        .await
        .expect("Failed to insert user into session");
}

/// The extractor value for a request to `path`
pub fn uri(path: &str) -> OriginalUri {
    OriginalUri(path.parse().expect("Invalid test URI"))
}

/// Deserializes the JSON body of `response`
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
