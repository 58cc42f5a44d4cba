use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::validation::ValidationError;

#[derive(Error, Debug, PartialEq)]
pub enum DeleteError {
    #[error("Delete request was not confirmed")]
    NotConfirmed,
    /// Shift is not one of the helper's shifts within the job.
    #[error("Shift ID {0} is not a registration of the helper within the job")]
    InvalidShiftSelection(i32),
}

impl IntoResponse for DeleteError {
    fn into_response(self) -> Response {
        let error = match self {
            Self::NotConfirmed => {
                ValidationError::field("confirm", "Please confirm the deletion.")
            }
            Self::InvalidShiftSelection(shift_id) => ValidationError::field(
                "shifts",
                format!("Shift {} is not a shift of this helper.", shift_id),
            ),
        };

        error.into_response()
    }
}
