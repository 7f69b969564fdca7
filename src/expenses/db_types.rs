use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::schema::expenses as ExpensesTable;

#[derive(Serialize, Deserialize, Queryable, Debug, Clone, Identifiable, QueryableByName)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub amount: BigDecimal,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = ExpensesTable)]
pub struct CreateExpense {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub amount: BigDecimal,
    pub description: Option<String>,
}
