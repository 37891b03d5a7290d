//! Authenticated principal handed to the authentication layer.
//!
//! A principal carries the stored credential verbatim. Nothing here hashes or
//! verifies passwords; the caller compares the credential using its own policy.

use std::fmt;

use serde::Serialize;

/// Entity name used when a username lookup finds nothing.
pub const ENTITY_USER: &str = "User";

/// An authenticated identity: username, opaque credential, ordered authorities.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub username: String,
    /// Stored credential, passed through untouched. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub authorities: Vec<String>,
}

impl Principal {
    /// Build a principal, mapping each role name one-to-one onto an authority.
    ///
    /// Role order is preserved.
    pub fn from_roles<I, S>(username: String, password: String, role_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username,
            password,
            authorities: role_names.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("authorities", &self.authorities)
            .finish()
    }
}
