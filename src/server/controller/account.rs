use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        agreement::{AgreementDto, UserAgreementDto},
        api::ErrorDto,
    },
    server::{
        controller::util::actor::require_actor, error::Error, model::app::AppState,
        service::agreement::AgreementService,
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// Agreements in effect that the logged in user has not accepted yet
#[utoipa::path(
    get,
    path = "/api/account/agreements",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Pending agreements ordered by begin", body = Vec<AgreementDto>),
        (status = 303, description = "Login required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn agreements(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, Error> {
    let actor = require_actor(&state, &session, &uri).await?;

    let pending = AgreementService::new(&state.db).pending(&actor).await?;

    Ok((StatusCode::OK, Json(pending)))
}

/// Accept an agreement, a repeated acceptance keeps the first timestamp
#[utoipa::path(
    post,
    path = "/api/account/agreements/{agreement}/agree",
    tag = ACCOUNT_TAG,
    params(("agreement" = i32, Path, description = "ID of the agreement")),
    responses(
        (status = 200, description = "Acceptance with its timestamp", body = UserAgreementDto),
        (status = 303, description = "Login required"),
        (status = 404, description = "Agreement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn agree(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(agreement_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = require_actor(&state, &session, &uri).await?;

    let user_agreement = AgreementService::new(&state.db)
        .agree(&actor, agreement_id)
        .await?;

    Ok((StatusCode::OK, Json(user_agreement)))
}
