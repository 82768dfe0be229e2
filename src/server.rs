//! HTTP surface: a single slash-command endpoint
//!
//! The chat client expects a parsable JSON body on every call, so every
//! request is answered with 200 and a [`BotResponse`], whatever went wrong.

use axum::{
    extract::{rejection::FormRejection, State},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::bot::{BotResponse, MemeBot};
use crate::errors::{AppError, AppResult};

/// Fields of a slash-command request that memebot looks at
#[derive(Debug, Default, Deserialize)]
pub struct CommandForm {
    #[serde(default)]
    pub text: String,
    pub user_name: Option<String>,
    pub channel_name: Option<String>,
}

/// Build the router. `/` and any other path accept GET (query string) and
/// POST (form body).
pub fn router(bot: Arc<MemeBot>) -> Router {
    Router::new()
        .route("/", get(handle_command).post(handle_command))
        .fallback(handle_command)
        .with_state(bot)
}

async fn handle_command(
    State(bot): State<Arc<MemeBot>>,
    form: Result<Form<CommandForm>, FormRejection>,
) -> Json<BotResponse> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, "Undecodable slash command request, treating as empty");
            CommandForm::default()
        }
    };

    debug!(
        text = %form.text,
        user = form.user_name.as_deref().unwrap_or("-"),
        channel = form.channel_name.as_deref().unwrap_or("-"),
        "Slash command received"
    );

    Json(bot.handle(&form.text).await)
}

/// Bind `listen` and serve until Ctrl+C
pub async fn serve(listen: SocketAddr, bot: Arc<MemeBot>) -> AppResult<()> {
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| AppError::server_with_source(format!("Failed to bind {}", listen), e))?;
    serve_on(listener, bot).await
}

/// Serve on an already bound listener until Ctrl+C
pub async fn serve_on(listener: TcpListener, bot: Arc<MemeBot>) -> AppResult<()> {
    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::server_with_source("Failed to read listen address", e))?;
    info!(addr = %local_addr, "memebot listening");

    axum::serve(listener, router(bot))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::server_with_source("HTTP server exited with error", e))?;

    info!("memebot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C signal, shutting down");
}
