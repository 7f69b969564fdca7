use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::web::templates;

#[derive(Debug)]
pub enum WebError {
    Unauthenticated,
    Validation(String),
    DatabaseError(String),
    InternalError(String),
}

impl WebError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::DatabaseError(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Unauthenticated => StatusCode::SEE_OTHER,
            WebError::Validation(_) => StatusCode::BAD_REQUEST,
            WebError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            WebError::Unauthenticated => "Please log in first".to_string(),
            WebError::Validation(msg) => msg.clone(),
            WebError::DatabaseError(msg) => msg.clone(),
            WebError::InternalError(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            // Protected pages bounce to the login form instead of erroring
            WebError::Unauthenticated => Redirect::to("/login").into_response(),
            other => {
                let status = other.status_code();
                (status, Html(templates::error_page(&other.message()))).into_response()
            }
        }
    }
}
