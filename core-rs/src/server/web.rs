use axum::response::Html;

/// Test page: a free-form SPARQL form plus links to the demo operations
const WEB_PAGE: &str = include_str!("../../assets/lvc-web.html");

pub async fn handle_web() -> Html<&'static str> {
    Html(WEB_PAGE)
}
