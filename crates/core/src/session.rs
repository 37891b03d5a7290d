//! Per-session attribute map written by lookups as an explicit output.
//!
//! Callers own the map and hand it in by `&mut`; nothing here is global.

use std::collections::HashMap;

use serde::Serialize;

/// Key under which a successful principal lookup stores the user's image path.
pub const SESSION_KEY_USER_IMAGE: &str = "user_image";

/// String attributes scoped to one caller session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SessionAttributes {
    values: HashMap<String, String>,
}

impl SessionAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, or remove it when `value` is `None`.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.values.insert(key.to_string(), v.to_string());
            }
            None => {
                self.values.remove(key);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_none_removes_existing_value() {
        let mut session = SessionAttributes::new();
        session.set(SESSION_KEY_USER_IMAGE, Some("/img/a.png"));
        assert_eq!(session.get(SESSION_KEY_USER_IMAGE), Some("/img/a.png"));

        session.set(SESSION_KEY_USER_IMAGE, None);
        assert_eq!(session.get(SESSION_KEY_USER_IMAGE), None);
        assert!(session.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let mut session = SessionAttributes::new();
        session.set("k", Some("one"));
        session.set("k", Some("two"));
        assert_eq!(session.get("k"), Some("two"));
        session.set("k", None);
        assert!(session.is_empty());
    }
}
