use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "agreement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    /// First day on which users are asked to accept the agreement.
    pub begin: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_agreement::Entity")]
    UserAgreement,
}

impl Related<super::user_agreement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAgreement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
