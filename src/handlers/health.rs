/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = String, content_type = "text/plain"))
)]
pub async fn health_handler() -> &'static str {
    "Working!"
}
