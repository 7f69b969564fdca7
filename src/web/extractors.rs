use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    sessions::SESSION_COOKIE,
    users::{db_types::UserRecord, operations as user_ops},
    utils::{app_config::AppConfig, db::get_conn},
};

/// The logged-in user for this request, resolved from the session cookie and
/// loaded from the database. Handlers that take this extractor are only ever
/// invoked with a live session.
pub struct CurrentUser {
    pub user: UserRecord,
    pub token: String,
}

/// Rejection for protected pages: bounce to the login form.
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

/// Pull the session token out of the Cookie header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

#[async_trait]
impl FromRequestParts<AppConfig> for CurrentUser {
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppConfig,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or(AuthRedirect)?;
        let user_id = state.sessions.resolve(&token).ok_or(AuthRedirect)?;

        let pool = state.pool.clone();
        let user = tokio::task::spawn_blocking(move || {
            let mut conn = get_conn(pool).ok()?;
            user_ops::get_user(&mut conn, user_id).ok().flatten()
        })
        .await
        .map_err(|_| AuthRedirect)?
        .ok_or(AuthRedirect)?;

        Ok(CurrentUser { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_token_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; pb_session=abc123; lang=en"),
        );

        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_session_token_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));

        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }
}
