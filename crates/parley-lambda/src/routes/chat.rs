use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parley_core::models::chat::{ChatReply, ChatRequest};
use parley_core::models::identity::Identity;

use crate::cors::json_response;
use crate::error::ChatError;
use crate::middleware::identity::CallerIdentity;
use crate::state::AppState;

/// Relay a chat message to the generation endpoint.
///
/// The body is taken raw so malformed JSON goes through the same failure
/// path as a downstream error.
pub async fn chat(
    State(state): State<AppState>,
    CallerIdentity(identity): CallerIdentity,
    body: Bytes,
) -> Response {
    match relay(&state, identity.as_ref(), &body).await {
        Ok(reply) => json_response(StatusCode::OK, &reply),
        Err(e) => e.into_response(),
    }
}

async fn relay(
    state: &AppState,
    identity: Option<&Identity>,
    body: &[u8],
) -> Result<ChatReply, ChatError> {
    tracing::info!(body = %String::from_utf8_lossy(body), "received chat event");

    if let Some(identity) = identity {
        tracing::info!(
            user = identity.display_name().unwrap_or("unknown"),
            "authenticated user"
        );
    }

    let request = ChatRequest::parse(body)?;
    tracing::info!(
        message = %request.message,
        history_len = request.conversation_history.len(),
        "processing message"
    );

    let generated = state.generator.generate(&request.message).await?;

    Ok(request.reply(generated))
}
