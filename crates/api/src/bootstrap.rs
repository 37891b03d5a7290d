//! Startup provisioning of the first administrator account.
//!
//! When `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set, the server makes sure
//! that account exists and holds the `ADMIN` authority before it starts
//! accepting requests. An existing account keeps its stored password.

use std::fmt;

use storefront_core::roles::{has_authority, ROLE_ADMIN, ROLE_USER};
use storefront_db::models::user::CreateUser;
use storefront_db::repositories::{RoleRepo, UserRepo};
use storefront_db::DbPool;

use crate::auth::password::{check_password_strength, hash_password};
use crate::error::AppResult;

/// Credentials for the account provisioned at startup.
#[derive(Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminAccount {
    /// Read `ADMIN_USERNAME` / `ADMIN_PASSWORD`. Both unset disables the
    /// bootstrap.
    ///
    /// # Panics
    ///
    /// Panics when only one of the two variables is set.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )
        .unwrap_or_else(|msg| panic!("{msg}"))
    }

    fn from_vars(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Option<Self>, &'static str> {
        let username = username.filter(|u| !u.trim().is_empty());
        let password = password.filter(|p| !p.is_empty());
        match (username, password) {
            (Some(username), Some(password)) => Ok(Some(Self { username, password })),
            (None, None) => Ok(None),
            _ => Err("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
        }
    }
}

/// What [`ensure_admin`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The account did not exist and was created with `USER` and `ADMIN`.
    Created,
    /// The account existed without `ADMIN`; the role was granted.
    Promoted,
    /// Nothing to do.
    AlreadyAdmin,
}

/// Make sure `account` exists and holds the `ADMIN` authority.
///
/// Safe to run on every startup.
pub async fn ensure_admin(pool: &DbPool, account: &AdminAccount) -> AppResult<BootstrapOutcome> {
    if let Some(user) = UserRepo::find_by_username(pool, &account.username).await? {
        let roles = RoleRepo::list_for_user(pool, user.id).await?;
        let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
        if has_authority(&names, ROLE_ADMIN) {
            tracing::debug!(username = %user.username, "Admin account already provisioned");
            return Ok(BootstrapOutcome::AlreadyAdmin);
        }
        RoleRepo::grant(pool, user.id, ROLE_ADMIN).await?;
        tracing::info!(user_id = user.id, username = %user.username, "Granted ADMIN to existing user");
        return Ok(BootstrapOutcome::Promoted);
    }

    check_password_strength(&account.password)?;
    let input = CreateUser {
        username: account.username.clone(),
        password: hash_password(&account.password)?,
        first_name: None,
        last_name: None,
        email: None,
        phone: None,
        image_path: None,
    };
    let user = UserRepo::create(pool, &input).await?;
    for role in [ROLE_USER, ROLE_ADMIN] {
        RoleRepo::grant(pool, user.id, role).await?;
    }

    tracing::info!(user_id = user.id, username = %user.username, "Admin account created");
    Ok(BootstrapOutcome::Created)
}
