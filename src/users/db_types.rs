use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::schema::users as UsersTable;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, Identifiable, QueryableByName)]
#[diesel(table_name = UsersTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub currency: String,
    pub monthly_budget: BigDecimal,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = UsersTable)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub currency: String,
    pub monthly_budget: BigDecimal,
}
