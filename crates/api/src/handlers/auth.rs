//! Handler for `/auth/login`.
//!
//! Resolves the principal by username, verifies the submitted password
//! against the principal's stored credential, and issues an access token.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use storefront_core::error::CoreError;
use storefront_core::session::{SessionAttributes, SESSION_KEY_USER_IMAGE};
use storefront_db::services::ServiceError;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Message shared by unknown-user and wrong-password failures.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub username: String,
    pub authorities: Vec<String>,
    /// Image path recorded in the session during lookup, if the user has one.
    pub user_image: Option<String>,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let mut session = SessionAttributes::new();

    // 1. Resolve the principal. An unknown user looks like a bad password.
    let principal = match state
        .principals
        .find_principal(&input.username, &mut session)
        .await
    {
        Ok(principal) => principal,
        Err(ServiceError::Core(CoreError::NotFoundByKey { .. })) => {
            return Err(AppError::Core(CoreError::Unauthorized(
                INVALID_CREDENTIALS.into(),
            )));
        }
        Err(e) => return Err(e.into()),
    };

    // 2. Verify the submitted password against the stored credential.
    if !verify_password(&input.password, &principal.password)? {
        tracing::warn!(username = %principal.username, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 3. Issue the access token.
    let access_token = generate_access_token(&principal, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %principal.username, "User logged in");

    Ok(Json(LoginResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user_image: session.get(SESSION_KEY_USER_IMAGE).map(str::to_string),
        username: principal.username,
        authorities: principal.authorities,
    }))
}
