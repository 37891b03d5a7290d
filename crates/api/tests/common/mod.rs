#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use storefront_api::auth::jwt::JwtConfig;
use storefront_api::auth::password::hash_password;
use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;
use storefront_db::models::user::{CreateUser, User};
use storefront_db::repositories::{RoleRepo, UserRepo};

/// Plaintext password given to every user created by [`create_test_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Origin allowed by [`test_config`].
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Build a test `ServerConfig` with safe defaults and no admin bootstrap.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
        },
        admin: None,
    }
}

/// The production router over `pool`, configured by [`test_config`].
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState::new(pool, config.clone()), &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// User helpers
// ---------------------------------------------------------------------------

/// Create a user with an Argon2id-hashed [`TEST_PASSWORD`] and the given roles
/// (granted in order).
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    image_path: Option<&str>,
    roles: &[&str],
) -> User {
    let input = CreateUser {
        username: username.to_string(),
        password: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        first_name: None,
        last_name: None,
        email: Some(format!("{username}@test.com")),
        phone: None,
        image_path: image_path.map(str::to_string),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    for role in roles {
        RoleRepo::grant(pool, user.id, role)
            .await
            .expect("role grant should succeed");
    }
    user
}

/// Log in through the API and return the access token.
pub async fn login_for_token(app: Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}
