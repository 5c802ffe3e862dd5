//! Shared identity types.
//!
//! Every authenticated caller is one of three roles. The tagged union makes
//! role handling exhaustive at compile time instead of relying on callers
//! casting a loosely-shaped user object to the role they expect.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marketplace role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Founder,
    Talent,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Founder => "founder",
            Role::Talent => "talent",
            Role::Admin => "admin",
        }
    }
}

/// An authenticated marketplace user, discriminated by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum User {
    Founder { id: Uuid, name: String, email: String },
    Talent { id: Uuid, name: String, email: String },
    Admin { id: Uuid, name: String, email: String },
}

impl User {
    pub fn id(&self) -> Uuid {
        match self {
            User::Founder { id, .. } | User::Talent { id, .. } | User::Admin { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            User::Founder { name, .. } | User::Talent { name, .. } | User::Admin { name, .. } => {
                name
            }
        }
    }

    pub fn role(&self) -> Role {
        match self {
            User::Founder { .. } => Role::Founder,
            User::Talent { .. } => Role::Talent,
            User::Admin { .. } => Role::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_tagging() {
        let user = User::Talent {
            id: Uuid::new_v4(),
            name: "Mara".to_string(),
            email: "mara@example.com".to_string(),
        };
        assert_eq!(user.role(), Role::Talent);

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"role\":\"talent\""));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role(), Role::Talent);
        assert_eq!(back.name(), "Mara");
    }
}
