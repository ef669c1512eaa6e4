use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use parley_core::error::CoreError;
use parley_core::models::chat::ChatReply;
use parley_generate::GenerateError;

use crate::cors::json_response;

/// Anything that can go wrong while relaying a chat message.
///
/// Callers see one shape regardless of cause: status 500 with the error
/// text. The variants exist for the logs.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    InvalidBody(#[from] CoreError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            ChatError::InvalidBody(_) => tracing::error!(error = %message, "rejected request body"),
            ChatError::Generate(_) => tracing::error!(error = %message, "generation failed"),
        }

        json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ChatReply::failure(message),
        )
    }
}
