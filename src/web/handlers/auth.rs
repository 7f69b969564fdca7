use axum::{
    Form,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::{
    sessions::SESSION_COOKIE,
    users::operations::{self as user_ops, NewUserInput, UserStoreError},
    utils::app_config::AppConfig,
    web::{error::WebError, response::ActionResult, templates, validation},
};

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub currency: String,
    pub monthly_budget: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /register - Registration form
pub async fn register_form() -> Html<String> {
    Html(templates::register_page(None))
}

/// POST /register - Create the account, then send the user to the login form
pub async fn register(
    State(app_config): State<AppConfig>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let input = match parse_register_form(form) {
        Ok(input) => input,
        Err(e) => {
            return Html(templates::register_page(Some(&ActionResult::error(
                e.message(),
            ))))
            .into_response();
        }
    };

    let pool = app_config.pool.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        user_ops::register(&mut conn, input)
    })
    .await;

    match outcome {
        Ok(Ok(user)) => {
            tracing::info!("Registered user {}", user.username);
            Redirect::to("/login").into_response()
        }
        Ok(Err(e @ UserStoreError::DuplicateUsername)) => Html(templates::register_page(Some(
            &ActionResult::error(e.to_string()),
        )))
        .into_response(),
        Ok(Err(e)) => {
            tracing::error!("Registration failed: {}", e);
            WebError::database_error("Registration failed").into_response()
        }
        Err(e) => {
            tracing::error!("Registration task failed: {}", e);
            WebError::internal_error("Registration failed").into_response()
        }
    }
}

fn parse_register_form(form: RegisterForm) -> Result<NewUserInput, WebError> {
    let username = validation::require_field(&form.username, "Username")?;

    if form.password.is_empty() {
        return Err(WebError::validation("Password is required"));
    }

    let currency = {
        let trimmed = form.currency.trim();
        if trimmed.is_empty() {
            "USD".to_string()
        } else {
            trimmed.to_string()
        }
    };

    let monthly_budget = if form.monthly_budget.trim().is_empty() {
        BigDecimal::from(1000)
    } else {
        validation::parse_amount(&form.monthly_budget, "Monthly budget")?
    };
    if monthly_budget < BigDecimal::from(0) {
        return Err(WebError::validation("Monthly budget cannot be negative"));
    }

    Ok(NewUserInput {
        username,
        password: form.password,
        currency,
        monthly_budget,
    })
}

/// GET /login - Login form
pub async fn login_form() -> Html<String> {
    Html(templates::login_page(None))
}

/// POST /login - Check credentials, set the session cookie, go to dashboard
pub async fn login(State(app_config): State<AppConfig>, Form(form): Form<LoginForm>) -> Response {
    let pool = app_config.pool.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        user_ops::authenticate(&mut conn, &form.username, &form.password)
    })
    .await;

    match outcome {
        Ok(Ok(user)) => {
            let token = app_config.sessions.issue(user.id);
            tracing::info!("User {} logged in", user.username);

            let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, token);
            ([(header::SET_COOKIE, cookie)], Redirect::to("/dashboard")).into_response()
        }
        Ok(Err(e @ UserStoreError::InvalidCredentials)) => {
            Html(templates::login_page(Some(&ActionResult::error(
                e.to_string(),
            ))))
            .into_response()
        }
        Ok(Err(e)) => {
            tracing::error!("Login failed: {}", e);
            WebError::database_error("Login failed").into_response()
        }
        Err(e) => {
            tracing::error!("Login task failed: {}", e);
            WebError::internal_error("Login failed").into_response()
        }
    }
}

/// GET /logout - Revoke the session and clear the cookie
pub async fn logout(
    State(app_config): State<AppConfig>,
    current: crate::web::extractors::CurrentUser,
) -> Response {
    app_config.sessions.revoke(&current.token);
    tracing::info!("User {} logged out", current.user.username);

    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);
    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str, currency: &str, budget: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            password: password.to_string(),
            currency: currency.to_string(),
            monthly_budget: budget.to_string(),
        }
    }

    #[test]
    fn test_register_form_defaults() {
        let input = parse_register_form(form("dana", "hunter2", "", "")).unwrap();

        assert_eq!(input.currency, "USD");
        assert_eq!(input.monthly_budget, BigDecimal::from(1000));
    }

    #[test]
    fn test_register_form_rejects_blank_username() {
        assert!(parse_register_form(form("   ", "hunter2", "USD", "500")).is_err());
    }

    #[test]
    fn test_register_form_rejects_negative_budget() {
        assert!(parse_register_form(form("dana", "hunter2", "USD", "-5")).is_err());
    }

    #[test]
    fn test_register_form_rejects_non_numeric_budget() {
        assert!(parse_register_form(form("dana", "hunter2", "USD", "lots")).is_err());
    }
}
