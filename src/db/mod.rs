use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};

pub mod migrator;
pub mod repositories;

pub use repositories::news::{NewsPost, NewsWithAuthor};
pub use repositories::user::User;

/// Handle on the relational store. One `Store` is opened per user-initiated
/// operation and dropped afterwards; the pool is capped at a single
/// connection, so there is no reuse across operations and no pooling to
/// manage.
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    /// Open a connection and idempotently ensure the schema exists. Driver
    /// failure is reported as a connection error; the caller aborts the
    /// current operation and surfaces the message.
    pub async fn connect(db_url: &str) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if let Some(path_str) = db_url.strip_prefix("sqlite:") {
            if !path_str.starts_with(":memory:") {
                if let Some(parent) = Path::new(path_str).parent() {
                    std::fs::create_dir_all(parent).ok();
                }
                if !Path::new(path_str).exists() {
                    std::fs::File::create(path_str)
                        .map_err(|e| Error::Connection(e.to_string()))?;
                }
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        migrator::Migrator::up(&conn, None).await?;

        info!("Database connected & schema ensured");

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn news_repo(&self) -> repositories::news::NewsRepository {
        repositories::news::NewsRepository::new(self.conn.clone())
    }

    // ========== User Operations ==========

    pub async fn list_users(&self, filter: Option<&str>) -> Result<Vec<User>> {
        self.user_repo().list(filter).await
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get(id).await
    }

    pub async fn find_user_id_by_username(&self, username: &str) -> Result<Option<i32>> {
        self.user_repo().find_id_by_username(username).await
    }

    pub async fn add_user(
        &self,
        username: &str,
        email: &str,
        age: Option<i32>,
        contact_number: Option<&str>,
        occupation: Option<&str>,
    ) -> Result<i32> {
        self.user_repo()
            .create(username, email, age, contact_number, occupation)
            .await
    }

    pub async fn update_user(
        &self,
        id: i32,
        username: &str,
        email: &str,
        age: Option<i32>,
        contact_number: Option<&str>,
        occupation: Option<&str>,
    ) -> Result<()> {
        self.user_repo()
            .update(id, username, email, age, contact_number, occupation)
            .await
    }

    pub async fn delete_user(&self, id: i32) -> Result<bool> {
        self.user_repo().delete(id).await
    }

    // ========== News Operations ==========

    pub async fn list_news(&self, filter: Option<&str>) -> Result<Vec<NewsWithAuthor>> {
        self.news_repo().list(filter).await
    }

    pub async fn list_news_for_user(&self, user_id: i32) -> Result<Vec<NewsPost>> {
        self.news_repo().list_for_user(user_id).await
    }

    pub async fn get_news(&self, id: i32) -> Result<Option<NewsPost>> {
        self.news_repo().get(id).await
    }

    pub async fn add_news(&self, user_id: i32, title: &str, body: &str) -> Result<i32> {
        self.news_repo().create(user_id, title, body).await
    }

    pub async fn update_news(
        &self,
        id: i32,
        title: &str,
        body: &str,
        new_owner: Option<i32>,
    ) -> Result<()> {
        self.news_repo().update(id, title, body, new_owner).await
    }

    pub async fn delete_news(&self, id: i32) -> Result<bool> {
        self.news_repo().delete(id).await
    }
}
