use axum::response::{Html, IntoResponse};

/// Tag for grouping the index endpoint in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Landing page banner.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Landing page banner", content_type = "text/html", body = String)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Html("<h1>Code challenge</h1>")
}
