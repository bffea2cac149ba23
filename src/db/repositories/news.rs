use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use crate::entities::{news_posts, prelude::*, users};
use crate::error::{Error, Result};
use crate::validation;

#[derive(Debug, Clone)]
pub struct NewsPost {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub created_at: String,
}

impl From<news_posts::Model> for NewsPost {
    fn from(model: news_posts::Model) -> Self {
        Self {
            id: model.news_id,
            user_id: model.user_id,
            title: model.title,
            body: model.body,
            created_at: model.created_at,
        }
    }
}

/// A post joined to its owner's username. The author is None only when the
/// join finds no owner row, which the cascade makes unreachable in practice.
#[derive(Debug, Clone)]
pub struct NewsWithAuthor {
    pub post: NewsPost,
    pub author: Option<String>,
}

pub struct NewsRepository {
    conn: DatabaseConnection,
}

impl NewsRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// List all posts joined to their owner, newest first. One filter value
    /// matches title OR body OR owner username as a substring.
    pub async fn list(&self, filter: Option<&str>) -> Result<Vec<NewsWithAuthor>> {
        let mut query = NewsPosts::find()
            .find_also_related(Users)
            .order_by_desc(news_posts::Column::CreatedAt);

        if let Some(term) = filter {
            query = query.filter(
                Condition::any()
                    .add(news_posts::Column::Title.contains(term))
                    .add(news_posts::Column::Body.contains(term))
                    .add(users::Column::Username.contains(term)),
            );
        }

        let rows = query.all(&self.conn).await?;

        Ok(rows
            .into_iter()
            .map(|(post, user)| NewsWithAuthor {
                post: NewsPost::from(post),
                author: user.map(|u| u.username),
            })
            .collect())
    }

    /// Posts owned by one user, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<NewsPost>> {
        let rows = NewsPosts::find()
            .filter(news_posts::Column::UserId.eq(user_id))
            .order_by_desc(news_posts::Column::CreatedAt)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(NewsPost::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<NewsPost>> {
        let post = NewsPosts::find_by_id(id).one(&self.conn).await?;
        Ok(post.map(NewsPost::from))
    }

    /// Insert a post for an existing user. Validation runs before any store
    /// access; an unresolvable owner surfaces as not-found through the FK.
    /// The creation timestamp is set here and never updated.
    pub async fn create(&self, user_id: i32, title: &str, body: &str) -> Result<i32> {
        let title = validation::require("title", title)?;
        let body = validation::normalize_body(body);
        if body.trim().is_empty() {
            return Err(Error::validation("body is required"));
        }

        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let active_model = news_posts::ActiveModel {
            user_id: Set(user_id),
            title: Set(title.clone()),
            body: Set(body.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let res = NewsPosts::insert(active_model).exec(&self.conn).await?;
        info!("Added news post '{}' for user {}", title, user_id);
        Ok(res.last_insert_id)
    }

    /// Update title and body, optionally reassigning the owner (the
    /// by-username entry point re-resolves the name to an id first). The row
    /// is fetched first so a missing id is reported instead of silently
    /// affecting zero rows.
    pub async fn update(
        &self,
        id: i32,
        title: &str,
        body: &str,
        new_owner: Option<i32>,
    ) -> Result<()> {
        let title = validation::require("title", title)?;
        let body = validation::normalize_body(body);
        if body.trim().is_empty() {
            return Err(Error::validation("body is required"));
        }

        let post = NewsPosts::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| Error::not_found("news post", id))?;

        let mut active: news_posts::ActiveModel = post.into();
        active.title = Set(title);
        active.body = Set(body.to_string());
        if let Some(owner) = new_owner {
            active.user_id = Set(owner);
        }
        active.update(&self.conn).await?;

        info!("Updated news post {}", id);
        Ok(())
    }

    /// Returns false when nothing matched. Confirmation is the caller's
    /// concern.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = NewsPosts::delete_by_id(id).exec(&self.conn).await?;

        if result.rows_affected > 0 {
            info!("Deleted news post {}", id);
        }
        Ok(result.rows_affected > 0)
    }
}
