pub mod prelude;

pub mod news_posts;
pub mod users;
