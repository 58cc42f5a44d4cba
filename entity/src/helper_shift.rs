use sea_orm::entity::prelude::*;

/// Registration of a helper for a single shift.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "helper_shift")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub helper_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub shift_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::helper::Entity",
        from = "Column::HelperId",
        to = "super::helper::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Helper,
    #[sea_orm(
        belongs_to = "super::shift::Entity",
        from = "Column::ShiftId",
        to = "super::shift::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Shift,
}

impl Related<super::helper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Helper.def()
    }
}

impl Related<super::shift::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shift.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
