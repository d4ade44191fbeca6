use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "news_article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub headline: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub source: Option<String>,
    pub category_id: i32,
    pub status: bool,
    pub created_by_id: Option<i16>,
    pub updated_by_id: Option<i16>,
    pub created_at: DateTime,
    pub modified_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::system_account::Entity",
        from = "Column::CreatedById",
        to = "super::system_account::Column::AccountId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::news_tag::Entity")]
    NewsTag,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::system_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Related<super::news_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::news_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::news_tag::Relation::NewsArticle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
