use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "helper")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub prename: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
    pub created_at: DateTime,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prename, self.surname)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Event,
    #[sea_orm(has_many = "super::helper_shift::Entity")]
    HelperShift,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::helper_shift::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HelperShift.def()
    }
}

impl Related<super::shift::Entity> for Entity {
    fn to() -> RelationDef {
        super::helper_shift::Relation::Shift.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::helper_shift::Relation::Helper.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
