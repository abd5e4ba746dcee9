//! Banner entity (read-only from this service's point of view)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::click_stat::Entity")]
    ClickStat,
}

impl Related<super::click_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClickStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
