use std::any::Any;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use plot_logging::{plot_error, plot_info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use token_plot_core::{analyze, Analysis, Tokenizer};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::{AppError, AppResult};
use crate::render;
use crate::settings::Settings;

/// Read-only per-process configuration shared by all requests.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<Settings>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let tokenizer: Arc<dyn Tokenizer> = Arc::from(settings.tokenizer.tokenizer());
        Self {
            settings: Arc::new(settings),
            tokenizer,
        }
    }

    fn analyze(&self, sentence: &str) -> Analysis {
        match self.settings.seed {
            Some(seed) => analyze(
                sentence,
                self.tokenizer.as_ref(),
                &mut StdRng::seed_from_u64(seed),
            ),
            None => analyze(sentence, self.tokenizer.as_ref(), &mut rand::thread_rng()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tokenize", post(tokenize))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", settings.host, settings.port))?;
    let addr = listener.local_addr().context("listener has no local address")?;
    plot_info!(
        "App listening at http://{} (tokenizer: {}, seed: {:?})",
        addr,
        settings.tokenizer,
        settings.seed
    );

    axum::serve(listener, build_router(AppState::new(settings)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;
    plot_info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        plot_error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}

async fn index() -> Html<String> {
    Html(render::index_page())
}

#[derive(Debug, Deserialize)]
struct SentencePayload {
    sentence: Option<String>,
}

async fn tokenize(State(state): State<AppState>, request: Request) -> AppResult<Html<String>> {
    let payload = read_payload(request).await?;
    let sentence = payload
        .sentence
        .ok_or_else(|| AppError::bad_request("missing field `sentence`"))?;

    let analysis = state.analyze(&sentence);
    let summary = analysis.summary.as_ref().map_err(|err| AppError::from(*err))?;
    plot_info!(
        "Tokenized {} tokens, predicted length {}",
        analysis.tokens.len(),
        summary.prediction
    );

    Ok(Html(render::result_page(&analysis, summary)?))
}

async fn read_payload(request: Request) -> AppResult<SentencePayload> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/json" => Json::<SentencePayload>::from_request(request, &())
            .await
            .map(|Json(payload)| payload)
            .map_err(|rejection| AppError::bad_request(rejection.body_text())),
        "application/x-www-form-urlencoded" => Form::<SentencePayload>::from_request(request, &())
            .await
            .map(|Form(payload)| payload)
            .map_err(|rejection| AppError::bad_request(rejection.body_text())),
        "" => Err(AppError::bad_request("missing content type")),
        other => Err(AppError::bad_request(format!(
            "unsupported content type {other}"
        ))),
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    plot_error!("Handler panicked: {}", detail);
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    (
        status,
        Html(render::error_page(
            status,
            "Something went wrong while handling the request.",
        )),
    )
        .into_response()
}
