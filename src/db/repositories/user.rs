use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::entities::{prelude::*, users};
use crate::error::{Error, Result};
use crate::validation;

/// User row as seen by the presentation layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub age: Option<i32>,
    pub contact_number: Option<String>,
    pub occupation: Option<String>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.user_id,
            username: model.username,
            email: model.email,
            age: model.age,
            contact_number: model.contact_number,
            occupation: model.occupation,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// List all users, optionally filtered by username substring.
    pub async fn list(&self, filter: Option<&str>) -> Result<Vec<User>> {
        let mut query = Users::find().order_by_asc(users::Column::UserId);

        if let Some(term) = filter {
            query = query.filter(users::Column::Username.contains(term));
        }

        let rows = query.all(&self.conn).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>> {
        let user = Users::find_by_id(id).one(&self.conn).await?;
        Ok(user.map(User::from))
    }

    pub async fn find_id_by_username(&self, username: &str) -> Result<Option<i32>> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await?;

        Ok(user.map(|u| u.user_id))
    }

    /// Insert a new user. Validation runs before any store access; a
    /// uniqueness violation on username or email surfaces as a conflict.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        age: Option<i32>,
        contact_number: Option<&str>,
        occupation: Option<&str>,
    ) -> Result<i32> {
        let username = validation::require("username", username)?;
        let email = validation::require("email", email)?;
        validation::validate_email(&email)?;

        let active_model = users::ActiveModel {
            username: Set(username.clone()),
            email: Set(email),
            age: Set(age),
            contact_number: Set(contact_number.map(ToString::to_string)),
            occupation: Set(occupation.map(ToString::to_string)),
            ..Default::default()
        };

        let res = Users::insert(active_model).exec(&self.conn).await?;
        info!("Added user: {}", username);
        Ok(res.last_insert_id)
    }

    /// Update an existing user. The row is fetched first so a missing id is
    /// reported instead of silently affecting zero rows. Username
    /// immutability is a presentation-layer convention; the operation
    /// accepts whatever value it is given.
    pub async fn update(
        &self,
        id: i32,
        username: &str,
        email: &str,
        age: Option<i32>,
        contact_number: Option<&str>,
        occupation: Option<&str>,
    ) -> Result<()> {
        let username = validation::require("username", username)?;
        let email = validation::require("email", email)?;
        validation::validate_email(&email)?;

        let user = Users::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| Error::not_found("user", id))?;

        let mut active: users::ActiveModel = user.into();
        active.username = Set(username.clone());
        active.email = Set(email);
        active.age = Set(age);
        active.contact_number = Set(contact_number.map(ToString::to_string));
        active.occupation = Set(occupation.map(ToString::to_string));
        active.update(&self.conn).await?;

        info!("Updated user {}: {}", id, username);
        Ok(())
    }

    /// Delete a user; the store cascades to all owned news posts. Returns
    /// false when nothing matched. Confirmation is the caller's concern.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Users::delete_by_id(id).exec(&self.conn).await?;

        if result.rows_affected > 0 {
            info!("Deleted user {} and associated news posts", id);
        }
        Ok(result.rows_affected > 0)
    }
}
