use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod handlers {
    pub mod email_dtos;
    pub mod email_handlers;
}
mod utils {
    pub mod email_template;
    pub mod mailer;
}
mod config {
    pub mod mail_config;
}

use handlers::email_handlers;
use config::mail_config::{self, MailConfig};
use utils::mailer::{Mailer, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mailer: Arc<dyn Mailer>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/send-email", post(email_handlers::send_email))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Error reporting stays off unless a DSN is configured.
    let _guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let mail_config = MailConfig::from_env()?;
    let mailer = SmtpMailer::new(&mail_config)?;
    tracing::info!(
        "Mail transport ready: {}:{} ({:?})",
        mail_config.smtp_host,
        mail_config.smtp_port,
        mail_config.security
    );

    let state = Arc::new(AppState {
        mailer: Arc::new(mailer),
    });
    let app = build_router(state);

    use tokio::net::TcpListener;

    let addr = mail_config::bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
