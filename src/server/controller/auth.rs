use axum::response::{IntoResponse, Redirect};
use tower_sessions::Session;

use crate::server::{
    controller::util::path::HOME_PATH, error::Error, model::session::user::SessionUserId,
};

pub static AUTH_TAG: &str = "auth";

/// Logs the user out by clearing their session
///
/// Logging in is handled by the external login page configured as `LOGIN_URL`.
///
/// # Responses
/// - 303 (See Other): Logged out, redirect to the start page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Logged out, redirect to the start page"),
        (status = 500, description = "Internal server error", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing an empty session errors, only clear when a user is present
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::to(HOME_PATH))
}
