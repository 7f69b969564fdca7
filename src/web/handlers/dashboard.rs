use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    aggregators::aggregate,
    expenses::{db_types::ExpenseRecord, operations as expense_ops, operations::ExpenseFilter},
    utils::{app_config::AppConfig, db::get_conn},
    web::{
        error::WebError, extractors::CurrentUser, response::ActionResult, templates, validation,
    },
};

/// Optional dashboard filters. Blank form fields mean "no filter".
#[derive(Debug, Deserialize, Default)]
pub struct DashboardParams {
    pub category: Option<String>,
    pub date: Option<String>,
}

/// GET /dashboard - Aggregated view, filters via query string
pub async fn view_dashboard(
    State(app_config): State<AppConfig>,
    current: CurrentUser,
    Query(params): Query<DashboardParams>,
) -> Response {
    render_dashboard(app_config, current, params).await
}

/// POST /dashboard - Same view, filters submitted from the filter form
pub async fn filter_dashboard(
    State(app_config): State<AppConfig>,
    current: CurrentUser,
    Form(params): Form<DashboardParams>,
) -> Response {
    render_dashboard(app_config, current, params).await
}

async fn render_dashboard(
    app_config: AppConfig,
    current: CurrentUser,
    params: DashboardParams,
) -> Response {
    let mut filter = ExpenseFilter {
        category: params.category.filter(|c| !c.trim().is_empty()),
        date: None,
    };

    let mut result: Option<ActionResult> = None;
    if let Some(raw) = params.date.filter(|d| !d.trim().is_empty()) {
        match validation::parse_date(&raw) {
            Ok(date) => filter.date = Some(date),
            // Show the rest of the dashboard unfiltered rather than a bare
            // error page
            Err(e) => result = Some(ActionResult::error(e.message())),
        }
    }

    let pool = app_config.pool.clone();
    let owner = current.user.id;
    let filter_copy = filter.clone();
    let loaded = tokio::task::spawn_blocking(
        move || -> anyhow::Result<(Vec<ExpenseRecord>, Vec<ExpenseRecord>)> {
            let mut conn = get_conn(pool)?;

            let all = expense_ops::list_for(&mut conn, owner, &ExpenseFilter::default())?;
            let visible = if filter_copy.is_empty() {
                all.clone()
            } else {
                expense_ops::list_for(&mut conn, owner, &filter_copy)?
            };

            Ok((all, visible))
        },
    )
    .await;

    let (all, visible) = match loaded {
        Ok(Ok(data)) => data,
        Ok(Err(e)) => {
            tracing::error!("Failed to load expenses: {}", e);
            return WebError::database_error("Failed to load expenses").into_response();
        }
        Err(e) => {
            tracing::error!("Expense load task failed: {}", e);
            return WebError::internal_error("Failed to load expenses").into_response();
        }
    };

    // The budget total and warning always cover every expense; only the
    // breakdown and the listing follow the active filter.
    let overall = aggregate(&all, &current.user.monthly_budget);
    let breakdown = aggregate(&visible, &current.user.monthly_budget);

    Html(templates::dashboard_page(
        &current.user,
        &overall,
        &breakdown,
        &visible,
        &filter,
        result.as_ref(),
    ))
    .into_response()
}
