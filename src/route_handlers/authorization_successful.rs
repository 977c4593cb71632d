pub async fn handler() -> impl axum::response::IntoResponse {
    let template = AuthorizationSuccessfulTemplate {};
    super::html_template::HtmlTemplate(template)
}

#[derive(askama::Template)]
#[template(path = "pages/authorization_successful.html")]
struct AuthorizationSuccessfulTemplate {}
