use axum::http::Uri;
use tower_sessions::Session;

use crate::server::{
    controller::util::actor::require_actor,
    error::Error,
    model::{app::AppState, db::UserModel},
    service::{
        hierarchy::{Hierarchy, HierarchyQuery, HierarchyResolver},
        permission::{EventRef, PermissionService},
    },
};

/// Shared guard of the admin handlers
///
/// Requires a login, resolves `query` (NotFound on unknown objects or a broken chain) and
/// requires the actor to administer the resolved event.
pub async fn admin_hierarchy(
    state: &AppState,
    session: &Session,
    uri: &Uri,
    query: HierarchyQuery<'_>,
) -> Result<(UserModel, Hierarchy), Error> {
    let actor = require_actor(state, session, uri).await?;

    let hierarchy = HierarchyResolver::new(&state.db).get_or_404(query).await?;

    PermissionService::new(&state.db)
        .require_admin(&actor, EventRef::Model(hierarchy.event()?))
        .await?;

    Ok((actor, hierarchy))
}

/// Guard checking the permission by slug before resolving the event
///
/// A non-superuser asking for an unknown slug gets the no-permission response rather than
/// NotFound.
pub async fn admin_event_by_slug(
    state: &AppState,
    session: &Session,
    uri: &Uri,
    url_name: &str,
) -> Result<(UserModel, Hierarchy), Error> {
    let actor = require_actor(state, session, uri).await?;

    PermissionService::new(&state.db)
        .require_admin(&actor, EventRef::UrlName(url_name))
        .await?;

    let hierarchy = HierarchyResolver::new(&state.db)
        .get_or_404(HierarchyQuery::event(url_name))
        .await?;

    Ok((actor, hierarchy))
}
