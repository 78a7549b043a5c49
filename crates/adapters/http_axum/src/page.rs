//! Single-page front end served at `/`.

use axum::response::{Html, IntoResponse, Response};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// The inventory page; all data is fetched client-side from the item API.
pub struct IndexPage;

impl IntoResponse for IndexPage {
    fn into_response(self) -> Response {
        Html(INDEX_HTML).into_response()
    }
}

/// `GET /`
pub async fn index() -> IndexPage {
    IndexPage
}
