//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa-axum so its OpenAPI specification ends up in
//! one document. Handlers sharing a path with different methods are registered together.
//! Swagger UI is served at `/api/docs`, the document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes, the session layer is added by the caller.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "shiftdesk", description = "shiftdesk API"), tags(
        (name = controller::registration::REGISTRATION_TAG, description = "Public event list and helper registration"),
        (name = controller::admin::ADMIN_TAG, description = "Administration of events, jobs, shifts and helpers"),
        (name = controller::account::ACCOUNT_TAG, description = "Agreements of the logged in user"),
        (name = controller::auth::AUTH_TAG, description = "Session handling"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Public
        .routes(routes!(controller::registration::index))
        .routes(routes!(
            controller::registration::get_form,
            controller::registration::submit_form
        ))
        .routes(routes!(controller::registration::registered))
        // Admin
        .routes(routes!(controller::admin::admin_index))
        .routes(routes!(
            controller::admin::event::new_event_form,
            controller::admin::event::create_event
        ))
        .routes(routes!(controller::admin::admin_event))
        .routes(routes!(
            controller::admin::event::edit_event_form,
            controller::admin::event::edit_event
        ))
        .routes(routes!(
            controller::admin::event::delete_event_form,
            controller::admin::event::delete_event
        ))
        .routes(routes!(controller::admin::job::jobs_and_shifts))
        .routes(routes!(
            controller::admin::job::new_job_form,
            controller::admin::job::create_job
        ))
        .routes(routes!(
            controller::admin::job::edit_job_form,
            controller::admin::job::edit_job
        ))
        .routes(routes!(
            controller::admin::job::delete_job_form,
            controller::admin::job::delete_job
        ))
        .routes(routes!(
            controller::admin::shift::new_shift_form,
            controller::admin::shift::create_shift
        ))
        .routes(routes!(
            controller::admin::shift::edit_shift_form,
            controller::admin::shift::edit_shift
        ))
        .routes(routes!(
            controller::admin::shift::delete_shift_form,
            controller::admin::shift::delete_shift
        ))
        .routes(routes!(controller::admin::helper::helpers))
        .routes(routes!(controller::admin::helper::job_helpers))
        .routes(routes!(
            controller::admin::helper::edit_helper_form,
            controller::admin::helper::edit_helper
        ))
        .routes(routes!(
            controller::admin::helper::delete_helper_form,
            controller::admin::helper::delete_helper
        ))
        .routes(routes!(controller::admin::export::export_event))
        .routes(routes!(controller::admin::export::export_job))
        .routes(routes!(controller::admin::create_agreement))
        // Account
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::account::agreements))
        .routes(routes!(controller::account::agree))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
