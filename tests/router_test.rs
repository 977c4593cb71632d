use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use saddlestats::{get_main_router, AppState};

fn test_app() -> axum::Router {
    get_main_router().with_state(AppState::new("test-session-secret"))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = hyper::body::to_bytes(response.into_body())
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}

#[tokio::test]
async fn landing_page_renders() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("/authorize"));
}

#[tokio::test]
async fn healthcheck_responds_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/healthcheck")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Ok");
}

#[tokio::test]
async fn authorization_successful_page_links_to_the_dashboard() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/authorization_successful")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("/home"));
}

#[tokio::test]
async fn authorize_redirects_to_strava() {
    std::env::set_var("STRAVA_CLIENT_ID", "12345");

    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/authorize")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Missing location header")
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://www.strava.com/oauth/authorize"));
    assert!(location.contains("client_id=12345"));
    assert!(location.contains("scope=read,activity:read"));
    assert!(location.contains("exchange_token"));
}

#[tokio::test]
async fn exchange_token_without_code_is_a_bad_request() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/exchange_token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("authorization code"));
}

#[tokio::test]
async fn exchange_token_with_provider_error_is_unauthorized() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/exchange_token?error=access_denied")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn home_without_a_session_redirects_to_authorize() {
    let response = test_app()
        .oneshot(Request::builder().uri("/home").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/authorize"
    );
}

#[tokio::test]
async fn home_ignores_an_unsigned_session_cookie() {
    // a cookie that was not signed with our key must not be trusted
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/home")
                .header(header::COOKIE, "saddlestats_session=forged-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/authorize"
    );
}
