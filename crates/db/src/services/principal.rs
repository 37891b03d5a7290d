//! Username lookup producing an authentication [`Principal`].

use storefront_core::error::CoreError;
use storefront_core::principal::{Principal, ENTITY_USER};
use storefront_core::session::{SessionAttributes, SESSION_KEY_USER_IMAGE};

use super::ServiceError;
use crate::models::user::UserWithRoles;
use crate::store::UserStore;

/// Translates stored users and their roles into principals.
#[derive(Debug, Clone)]
pub struct PrincipalLookupService<S> {
    store: S,
}

impl<S: UserStore> PrincipalLookupService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Find the user named `username` (exact match) and build its principal.
    ///
    /// On success the user's image path is written to `session` under
    /// [`SESSION_KEY_USER_IMAGE`], or that key is cleared when the user has
    /// no image. The password is passed through unverified.
    ///
    /// Fails with [`CoreError::NotFoundByKey`] for an unknown username, in
    /// which case `session` is left untouched.
    pub async fn find_principal(
        &self,
        username: &str,
        session: &mut SessionAttributes,
    ) -> Result<Principal, ServiceError> {
        let Some(UserWithRoles { user, roles }) =
            self.store.find_user_by_username(username).await?
        else {
            tracing::warn!(username, "Principal lookup found no user");
            return Err(CoreError::NotFoundByKey {
                entity: ENTITY_USER,
                key: username.to_string(),
            }
            .into());
        };

        session.set(SESSION_KEY_USER_IMAGE, user.image_path.as_deref());

        let principal = Principal::from_roles(
            user.username,
            user.password,
            roles.into_iter().map(|role| role.name),
        );
        tracing::debug!(
            username = %principal.username,
            authorities = ?principal.authorities,
            "Principal resolved",
        );
        Ok(principal)
    }
}
