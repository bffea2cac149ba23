use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    pub age: Option<i32>,

    pub contact_number: Option<String>,

    pub occupation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::news_posts::Entity")]
    NewsPosts,
}

impl Related<super::news_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NewsPosts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
