//! Signed-in user profile.

use serde::{Deserialize, Serialize};

use crate::menu::Role;

/// Shown in the avatar when the user has no usable name
pub const PLACEHOLDER_INITIAL: char = '?';

/// Read-only user record supplied by the session store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub role: Role,
    /// Path or URI of the profile picture
    pub profile_picture: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: Some(name.into()),
            role,
            profile_picture: None,
        }
    }

    /// Avatar fallback: first character of the name, uppercased
    pub fn initial(&self) -> char {
        self.name
            .as_deref()
            .and_then(|name| name.trim().chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or(PLACEHOLDER_INITIAL)
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "Guest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(UserProfile::new("rita", Role::Owner).initial(), 'R');
        assert_eq!(UserProfile::new("  émile", Role::Client).initial(), 'É');
        assert_eq!(UserProfile::default().initial(), PLACEHOLDER_INITIAL);
        assert_eq!(UserProfile::new("   ", Role::Client).initial(), PLACEHOLDER_INITIAL);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(UserProfile::new("Rita ", Role::Owner).display_name(), "Rita");
        assert_eq!(UserProfile::default().display_name(), "Guest");
    }
}
