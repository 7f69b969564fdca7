use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, PooledConnection},
    result::DatabaseErrorKind,
};
use thiserror::Error;
use uuid::Uuid;

use crate::users::db_types::{CreateUser, UserRecord};
use crate::users::password;
use crate::schema::users as UsersTable;

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Username already taken")]
    DuplicateUsername,
    #[error("Invalid credentials. Try again!")]
    InvalidCredentials,
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    #[error(transparent)]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Clone)]
pub struct NewUserInput {
    pub username: String,
    pub password: String,
    pub currency: String,
    pub monthly_budget: BigDecimal,
}

/// Create a user, storing an argon2 hash of the password.
///
/// Uniqueness is checked before insert; the unique index on `username` still
/// backstops a concurrent duplicate registration, which surfaces as the same
/// `DuplicateUsername` error.
pub fn register(
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
    input: NewUserInput,
) -> Result<UserRecord, UserStoreError> {
    use crate::schema::users::dsl::*;

    let taken = users
        .filter(username.eq(&input.username))
        .count()
        .get_result::<i64>(conn)?;
    if taken > 0 {
        return Err(UserStoreError::DuplicateUsername);
    }

    let hash = password::hash_password(&input.password)
        .map_err(|e| UserStoreError::Internal(e.to_string()))?;

    let record = diesel::insert_into(UsersTable::table)
        .values(&CreateUser {
            username: input.username,
            password_hash: hash,
            currency: input.currency,
            monthly_budget: input.monthly_budget,
        })
        .get_result::<UserRecord>(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                UserStoreError::DuplicateUsername
            }
            other => UserStoreError::Database(other),
        })?;

    Ok(record)
}

/// Look up a user by username and check the password.
///
/// Unknown username and wrong password both come back as
/// `InvalidCredentials`, so callers cannot probe which usernames exist.
pub fn authenticate(
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
    username_value: &str,
    password_value: &str,
) -> Result<UserRecord, UserStoreError> {
    use crate::schema::users::dsl::*;

    let user = users
        .filter(username.eq(username_value))
        .get_result::<UserRecord>(conn)
        .optional()?
        .ok_or(UserStoreError::InvalidCredentials)?;

    if !password::verify_password(password_value, &user.password_hash) {
        return Err(UserStoreError::InvalidCredentials);
    }

    Ok(user)
}

/// Fetch a user by id, e.g. when resolving a session token.
pub fn get_user(
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
    user_id: Uuid,
) -> Result<Option<UserRecord>, UserStoreError> {
    use crate::schema::users::dsl::*;

    let user = users
        .filter(id.eq(user_id))
        .get_result::<UserRecord>(conn)
        .optional()?;

    Ok(user)
}
