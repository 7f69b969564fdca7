use axum::{Router, routing::get};
use dotenvy::dotenv;
use std::env;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use pocketbook_back_end::utils::app_config::AppConfig;
use pocketbook_back_end::web::handlers::{
    auth::{login, login_form, logout, register, register_form},
    dashboard::{filter_dashboard, view_dashboard},
    expenses::{add_expense, add_expense_form},
    export::export_csv,
    landing::{health, index},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let app_config = AppConfig::from_env()?;
    tracing::info!("Application configuration loaded successfully");

    // Build router with all routes; protected pages resolve the session
    // cookie through the CurrentUser extractor
    let router = Router::new()
        // Public pages
        .route("/", get(index))
        .route("/health", get(health))
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        // Authenticated pages
        .route("/dashboard", get(view_dashboard).post(filter_dashboard))
        .route("/add_expense", get(add_expense_form).post(add_expense))
        .route("/export_csv", get(export_csv))
        .route("/logout", get(logout))
        // Middleware layers before state binding
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Shared state - applied after middleware
        .with_state(app_config);

    // Get port from environment or use default
    let port = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or(5000);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting Pocketbook server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
