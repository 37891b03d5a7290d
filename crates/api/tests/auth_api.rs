//! HTTP-level integration tests for login.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, post_json, TEST_PASSWORD};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_returns_authorities_and_image(pool: PgPool) {
    create_test_user(&pool, "juan", Some("/img/juan.png"), &["ADMIN", "VENDEDOR", "USER"]).await;

    let body = serde_json::json!({ "username": "juan", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["expires_in"], 900);
    assert_eq!(json["username"], "juan");
    assert_eq!(
        json["authorities"],
        serde_json::json!(["ADMIN", "VENDEDOR", "USER"])
    );
    assert_eq!(json["user_image"], "/img/juan.png");
    assert!(json.get("password").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_without_image_returns_null(pool: PgPool) {
    create_test_user(&pool, "rebeca", None, &["USER"]).await;

    let body = serde_json::json!({ "username": "rebeca", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["user_image"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password_returns_401(pool: PgPool) {
    create_test_user(&pool, "juan", None, &["USER"]).await;

    let body = serde_json::json!({ "username": "juan", "password": "incorrect_password" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user_returns_401(pool: PgPool) {
    let body = serde_json::json!({ "username": "ghost", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_username_is_case_sensitive(pool: PgPool) {
    create_test_user(&pool, "juan", None, &["USER"]).await;

    let body = serde_json::json!({ "username": "Juan", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
