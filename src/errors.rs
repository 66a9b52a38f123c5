use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failure talking to an upstream model provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to {provider} failed: {source}")]
    Transport {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} returned {status}: {body}")]
    Upstream {
        provider: String,
        status: u16,
        body: String,
    },
    #[error("failed to decode {provider} response: {source}")]
    Decode {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} returned no text content")]
    EmptyCompletion { provider: String },
    #[error("no API key configured for provider '{0}'")]
    MissingApiKey(String),
    /// Failure raised by a backend outside this crate, e.g. a custom `ChatModel`.
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("chat client '{0}' is not configured")]
    ClientNotConfigured(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Callers only ever see a generic 500; the detail stays in the logs.
        error!("Request failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::INTERNAL_SERVER_ERROR
                .canonical_reason()
                .unwrap_or("Internal Server Error"),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn api_error_is_a_bare_500() {
        let response = ApiError::from(ProviderError::Upstream {
            provider: "openai".to_string(),
            status: 401,
            body: "{\"error\":\"invalid key sk-secret\"}".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }

    #[test]
    fn provider_error_messages_name_the_provider() {
        let err = ProviderError::EmptyCompletion {
            provider: "anthropic".to_string(),
        };
        assert_eq!(err.to_string(), "anthropic returned no text content");
        assert_eq!(
            ApiError::ClientNotConfigured("openai".to_string()).to_string(),
            "chat client 'openai' is not configured"
        );
    }
}
