mod common;

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use wordstock::auth::Claims;

#[tokio::test]
async fn jwt_endpoint_issues_decodable_token() {
    let app = common::test_app().await;

    let response = app.oneshot(common::empty_request("GET", "/jwt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let token = body["token"].as_str().expect("token field");

    let decoding_key = jsonwebtoken::DecodingKey::from_secret(common::TEST_SECRET.as_bytes());
    let decoded = jsonwebtoken::decode::<Claims>(
        token,
        &decoding_key,
        &jsonwebtoken::Validation::default(),
    )
    .expect("token verifies against issuing secret");

    assert!(decoded.claims.authorized);
    assert_eq!(decoded.claims.user, "username");
    assert_eq!(decoded.claims.exp - decoded.claims.iat, 100 * 60);
}

#[tokio::test]
async fn hello_without_token_is_unauthorized() {
    let app = common::test_app().await;

    let response = app.oneshot(common::empty_request("GET", "/hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn hello_with_garbage_token_is_unauthorized() {
    let app = common::test_app().await;

    let mut request = common::empty_request("GET", "/hello");
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, "Bearer not.a.jwt".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn hello_with_issued_token_greets() {
    let app = common::test_app().await;

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", "/jwt"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    let mut request = common::empty_request("GET", "/hello");
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_bytes(response).await;
    assert_eq!(body, b"Hello, World!");
}
