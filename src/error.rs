use sea_orm::{DbErr, SqlErr};
use std::fmt;
use thiserror::Error;

/// Failure taxonomy for a single user-initiated operation. Every failure is
/// handled at the boundary of the operation that produced it; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Store unreachable; the operation was aborted before anything ran.
    #[error("database connection failed: {0}")]
    Connection(String),

    /// Malformed or missing input; no store access was performed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Uniqueness violation surfaced from the store.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced username or id does not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other store-reported failure.
    #[error("database error: {0}")]
    Store(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{resource} {id} not found"))
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
            // The only foreign key here is news_posts.user_id -> users, so a
            // constraint failure means the referenced user does not exist.
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                Self::NotFound("referenced user does not exist".to_string())
            }
            _ => match err {
                DbErr::Conn(e) => Self::Connection(e.to_string()),
                other => Self::Store(other.to_string()),
            },
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
