pub use super::news_posts::Entity as NewsPosts;
pub use super::users::Entity as Users;
