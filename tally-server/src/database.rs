use crate::queries::Queries;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tally_core::{NewUser, User};

pub struct ServerDatabase {
    pub pool: SqlitePool,
}

impl ServerDatabase {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the users table and its indexes if they do not exist yet.
    /// Called once at startup; safe to call again.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(Queries::CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(Queries::CREATE_NAME_INDEX)
            .execute(&self.pool)
            .await?;
        sqlx::query(Queries::CREATE_AMOUNT_INDEX)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, sqlx::Error> {
        let row = sqlx::query(Queries::INSERT_USER)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(new_user.amount)
            .fetch_one(&self.pool)
            .await?;

        Ok(User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            amount: row.get("amount"),
        })
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(Queries::FIND_USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            amount: row.get("amount"),
        }))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query(Queries::LIST_USERS)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                amount: row.get("amount"),
            })
            .collect())
    }
}
