use axum::{Json, http::StatusCode, response::Html};
use serde_json::{Value, json};

use crate::web::templates;

/// GET / - Public landing page
pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

/// GET /health - Liveness check
pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
