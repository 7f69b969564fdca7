use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use serde::Deserialize;

use crate::{
    expenses::{db_types::CreateExpense, operations as expense_ops},
    utils::{app_config::AppConfig, db::get_conn},
    web::{
        error::WebError, extractors::CurrentUser, response::ActionResult, templates, validation,
    },
};

#[derive(Debug, Deserialize)]
pub struct AddExpenseForm {
    pub category: String,
    pub amount: String,
    pub description: Option<String>,
}

/// GET /add_expense - Entry form
pub async fn add_expense_form(_current: CurrentUser) -> Html<String> {
    Html(templates::add_expense_page(None))
}

/// POST /add_expense - Record the expense, dated today, then back to the
/// dashboard
pub async fn add_expense(
    State(app_config): State<AppConfig>,
    current: CurrentUser,
    Form(form): Form<AddExpenseForm>,
) -> Response {
    let category = match validation::require_field(&form.category, "Category") {
        Ok(category) => category,
        Err(e) => {
            return Html(templates::add_expense_page(Some(&ActionResult::error(
                e.message(),
            ))))
            .into_response();
        }
    };

    // Sign is deliberately unconstrained; negatives are accepted as entered
    let amount = match validation::parse_amount(&form.amount, "Amount") {
        Ok(amount) => amount,
        Err(e) => {
            return Html(templates::add_expense_page(Some(&ActionResult::error(
                e.message(),
            ))))
            .into_response();
        }
    };

    let description = form
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let input = CreateExpense {
        user_id: current.user.id,
        date: Local::now().date_naive(),
        category,
        amount,
        description,
    };

    let pool = app_config.pool.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut conn = get_conn(pool)?;
        expense_ops::add_expense(&mut conn, input)
    })
    .await;

    match outcome {
        Ok(Ok(expense)) => {
            tracing::info!(
                "Recorded {} {} in {} for {}",
                expense.amount,
                current.user.currency,
                expense.category,
                current.user.username
            );
            Redirect::to("/dashboard").into_response()
        }
        Ok(Err(e)) => {
            tracing::error!("Failed to record expense: {}", e);
            WebError::database_error("Failed to record expense").into_response()
        }
        Err(e) => {
            tracing::error!("Expense task failed: {}", e);
            WebError::internal_error("Failed to record expense").into_response()
        }
    }
}
