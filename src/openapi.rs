use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_handler,
        crate::handlers::chat::openai_fact,
        crate::handlers::chat::claude_fact,
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Facts", description = "Fixed-prompt endpoints, one per chat client"),
    ),
    info(
        title = "Multiple LLMs API",
        version = "0.1.0",
        description = "Asks two hosted chat models for a fact and returns the text"
    ),
    servers(
        (url = "/", description = "Local server")
    )
)]
pub struct ApiDoc;
