//! User entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

use crate::models::role::Role;

/// Full user row from the `users` table.
///
/// Contains the stored password -- NEVER serialize this to API responses.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user together with its role grants, ordered by role id.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithRoles {
    pub user: User,
    pub roles: Vec<Role>,
}

/// DTO for creating a new user. `password` is stored as given.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
}
