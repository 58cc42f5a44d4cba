use axum::http::Uri;
use tower_sessions::Session;

use crate::server::{
    error::{access::AccessError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
    service::user::UserService,
};

/// Retrieves the acting user from session and then from database
///
/// # Returns
/// - `Ok(Some(UserModel))`: User in session and found in database
/// - `Ok(None)`: Anonymous request, or the user in session no longer exists (session is cleared)
/// - `Err(Error)`: Database query failures, session errors
pub async fn get_actor(state: &AppState, session: &Session) -> Result<Option<UserModel>, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Ok(None);
    };

    let user = UserService::new(&state.db).get_user(user_id).await?;

    if user.is_none() {
        session.clear().await;

        tracing::warn!(
            "Cleared session for user ID {} which was not found in database",
            user_id
        );
    }

    Ok(user)
}

/// Like [`get_actor`] but anonymous requests fail with a login redirect back to `uri`
pub async fn require_actor(
    state: &AppState,
    session: &Session,
    uri: &Uri,
) -> Result<UserModel, Error> {
    match get_actor(state, session).await? {
        Some(actor) => Ok(actor),
        None => Err(login_required(&state.login_url, uri).into()),
    }
}

/// Redirect to the login page with `next` set to the path of `uri`
pub fn login_required(login_url: &str, uri: &Uri) -> AccessError {
    AccessError::LoginRequired {
        location: format!("{}?next={}", login_url, urlencoding::encode(uri.path())),
    }
}
