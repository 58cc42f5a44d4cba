use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AgreementDto {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub begin: NaiveDate,
}

impl From<entity::agreement::Model> for AgreementDto {
    fn from(agreement: entity::agreement::Model) -> Self {
        Self {
            id: agreement.id,
            name: agreement.name,
            text: agreement.text,
            begin: agreement.begin,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AgreementForm {
    pub name: String,
    pub text: String,
    pub begin: NaiveDate,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserAgreementDto {
    pub agreement_id: i32,
    pub user_id: i32,
    pub agreed: Option<NaiveDateTime>,
}

impl From<entity::user_agreement::Model> for UserAgreementDto {
    fn from(user_agreement: entity::user_agreement::Model) -> Self {
        Self {
            agreement_id: user_agreement.agreement_id,
            user_id: user_agreement.user_id,
            agreed: user_agreement.agreed,
        }
    }
}
