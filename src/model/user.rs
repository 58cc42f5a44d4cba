use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_superuser: bool,
}

impl From<entity::app_user::Model> for UserDto {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_superuser: user.is_superuser,
        }
    }
}
