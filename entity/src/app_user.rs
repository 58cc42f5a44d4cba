use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub is_superuser: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_admin::Entity")]
    EventAdmin,
    #[sea_orm(has_many = "super::user_agreement::Entity")]
    UserAgreement,
}

impl Related<super::event_admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventAdmin.def()
    }
}

impl Related<super::user_agreement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAgreement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
