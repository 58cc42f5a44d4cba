use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "shift")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_id: i32,
    pub begin: DateTime,
    pub end: DateTime,
    /// Number of wanted helpers, `0` for no limit.
    pub number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Job,
    #[sea_orm(has_many = "super::helper_shift::Entity")]
    HelperShift,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::helper_shift::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HelperShift.def()
    }
}

impl Related<super::helper::Entity> for Entity {
    fn to() -> RelationDef {
        super::helper_shift::Relation::Helper.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::helper_shift::Relation::Shift.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
