use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use plot_logging::{plot_error, plot_warn};
use token_plot_core::SummaryError;

use crate::render;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Summary(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match &self {
            AppError::BadRequest(message) => {
                plot_warn!("Rejected request: {}", message);
                render::error_page(status, message)
            }
            AppError::Summary(err) => {
                plot_warn!("No prediction: {}", err);
                render::empty_result_page(err)
            }
            AppError::Internal(message) => {
                // Details stay in the log; the client gets a generic page.
                plot_error!("Request failed: {}", message);
                render::error_page(status, "Something went wrong while handling the request.")
            }
        };
        (status, Html(page)).into_response()
    }
}
