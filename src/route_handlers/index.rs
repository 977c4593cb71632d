pub async fn handler() -> impl axum::response::IntoResponse {
    let template = IndexTemplate {};
    super::html_template::HtmlTemplate(template)
}

#[derive(askama::Template)]
#[template(path = "pages/index.html")]
struct IndexTemplate {}
