use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Lowercased `name`, unique so names collide regardless of case
    #[sea_orm(unique)]
    pub name_key: String,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_tag::Entity")]
    NewsTag,
}

impl Related<super::news_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsTag.def()
    }
}

impl Related<super::news_article::Entity> for Entity {
    fn to() -> RelationDef {
        super::news_tag::Relation::NewsArticle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::news_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
