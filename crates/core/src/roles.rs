//! Well-known role names and the authority check built on them.
//!
//! Role names are used verbatim as authority strings.

/// Grants product mutations.
pub const ROLE_ADMIN: &str = "ADMIN";
/// Baseline role held by every account.
pub const ROLE_USER: &str = "USER";

/// Whether `authorities` contains `authority` (exact, case-sensitive match).
pub fn has_authority<S: AsRef<str>>(authorities: &[S], authority: &str) -> bool {
    authorities.iter().any(|a| a.as_ref() == authority)
}
