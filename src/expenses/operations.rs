use anyhow::Result;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, PooledConnection},
};
use uuid::Uuid;

use crate::expenses::db_types::{CreateExpense, ExpenseRecord};
use crate::schema::expenses as ExpensesTable;

/// Optional filters for listing a user's expenses. Both filters are
/// conjunctive when present; category matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date.is_none()
    }
}

/// Insert a new expense for its owner. The id is allocated by the database
/// (UUID v4), so concurrent callers never collide.
pub fn add_expense(
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
    input: CreateExpense,
) -> Result<ExpenseRecord> {
    let record = diesel::insert_into(ExpensesTable::table)
        .values(&input)
        .get_result::<ExpenseRecord>(conn)?;

    Ok(record)
}

/// List expenses owned by `owner`, oldest first.
pub fn list_for(
    conn: &mut PooledConnection<ConnectionManager<PgConnection>>,
    owner: Uuid,
    filter: &ExpenseFilter,
) -> Result<Vec<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let mut query = expenses.into_boxed();

    query = query.filter(user_id.eq(owner));

    if let Some(category_value) = &filter.category {
        query = query.filter(category.eq(category_value.clone()));
    }
    if let Some(date_value) = &filter.date {
        query = query.filter(date.eq(*date_value));
    }

    let records = query
        .order(created_at.asc())
        .get_results::<ExpenseRecord>(conn)?;

    Ok(records)
}
