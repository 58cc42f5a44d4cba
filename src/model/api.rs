use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a submitted form has invalid fields
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    /// Error messages keyed by the name of the offending field
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Body of every delete request
///
/// Nothing is deleted unless `confirm` is `true`.
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteForm {
    #[serde(default)]
    pub confirm: bool,
}
