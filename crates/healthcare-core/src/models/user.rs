// ABOUTME: User account model for registration and login
// ABOUTME: Holds identity, normalized email, and the bcrypt password hash
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered portal user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name given at registration
    pub name: String,
    /// Login email, stored lowercased
    pub email: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identifier
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: Self::normalize_email(&email),
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Canonical form used for storage and lookups
    #[must_use]
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email() {
        let user = User::new("Ada".into(), "  Ada@Example.COM ".into(), "hash".into());
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("Ada".into(), "ada@example.com".into(), "secret-hash".into());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
