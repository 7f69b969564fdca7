use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    expenses::operations::{self as expense_ops, ExpenseFilter},
    exporter,
    utils::{app_config::AppConfig, db::get_conn},
    web::{error::WebError, extractors::CurrentUser},
};

/// GET /export_csv - Download every expense of the logged-in user as
/// `expenses.csv`
pub async fn export_csv(
    State(app_config): State<AppConfig>,
    current: CurrentUser,
) -> Result<Response, WebError> {
    let pool = app_config.pool.clone();
    let owner = current.user.id;

    let bytes = tokio::task::spawn_blocking(move || -> anyhow::Result<Vec<u8>> {
        let mut conn = get_conn(pool)?;
        let records = expense_ops::list_for(&mut conn, owner, &ExpenseFilter::default())?;
        exporter::to_csv(&records)
    })
    .await
    .map_err(|e| WebError::internal_error(format!("Export task failed: {}", e)))?
    .map_err(|e| {
        tracing::error!("CSV export failed: {}", e);
        WebError::database_error("Failed to export expenses")
    })?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"expenses.csv\"".to_string(),
        ),
    ];

    Ok((headers, bytes).into_response())
}
