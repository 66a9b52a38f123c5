use crate::config::constants::{ANTHROPIC_CLIENT, OPENAI_CLIENT};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::State;
use std::sync::Arc;
use tracing::info;

pub const OPENAI_PROMPT: &str = "Tell me an interesting fact about OpenAI";
pub const ANTHROPIC_PROMPT: &str = "Tell me an interesting fact about Anthropic";

#[utoipa::path(
    get,
    path = "/openai",
    tag = "Facts",
    responses(
        (status = 200, description = "Completion text from the OpenAI chat client", body = String, content_type = "text/plain"),
        (status = 500, description = "The provider call failed")
    )
)]
pub async fn openai_fact(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    ask(&state, OPENAI_CLIENT, OPENAI_PROMPT).await
}

#[utoipa::path(
    get,
    path = "/claude",
    tag = "Facts",
    responses(
        (status = 200, description = "Completion text from the Anthropic chat client", body = String, content_type = "text/plain"),
        (status = 500, description = "The provider call failed")
    )
)]
pub async fn claude_fact(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    ask(&state, ANTHROPIC_CLIENT, ANTHROPIC_PROMPT).await
}

async fn ask(state: &AppState, client_name: &str, prompt: &str) -> Result<String, ApiError> {
    let client = state
        .clients
        .get(client_name)
        .ok_or_else(|| ApiError::ClientNotConfigured(client_name.to_string()))?;

    let text = client.submit(prompt).await?;
    info!(
        "Chat client '{}' answered with {} bytes",
        client_name,
        text.len()
    );
    Ok(text)
}
