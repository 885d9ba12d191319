use sqlx::{FromRow, SqlitePool};

use crate::schema::Role;

/// A stored admin or user credential. `password` holds the Argon2 hash.
#[derive(Debug, FromRow)]
pub struct Account{
    pub id: i64,
    pub username: String,
    pub password: String,
}

pub async fn check_account_exists(pool:&SqlitePool, role:Role, username:&str) -> Result<bool, sqlx::Error>{

    let query = format!("SELECT id FROM {} WHERE username = ?", role.account_table());

    let result: Option<(i64,)> = sqlx::query_as(&query)
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(result.is_some())
}

pub async fn create_account(pool:&SqlitePool, role:Role, username:&str, password_hash:&str) -> Result<i64, sqlx::Error>{

    let query = format!(
        "INSERT INTO {} (username, password) VALUES (?, ?) RETURNING id",
        role.account_table()
    );

    let (id,): (i64,) = sqlx::query_as(&query)
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

    Ok(id)
}

pub async fn find_account(pool:&SqlitePool, role:Role, username:&str) -> Result<Option<Account>, sqlx::Error>{

    let query = format!(
        "SELECT id, username, password FROM {} WHERE username = ?",
        role.account_table()
    );

    sqlx::query_as::<_, Account>(&query)
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// True when the insert lost a race against another signup for the same name.
pub fn is_duplicate_username(err:&sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
