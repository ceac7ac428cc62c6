//! # User identity as seen by the client
//!
//! [`UserInfo`] is the identity block returned by `POST /auth/login` and stored
//! inside the session record. [`Role`] is a closed enum: every decision that
//! depends on the kind of account matches on it exhaustively.
//!
//! [`UserProfile`] is the longer record returned by `GET /auth/profile`.

use serde::{Deserialize, Serialize};

/// Kind of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Ngo,
}

impl Role {
    /// Wire value, as used by the backend and form selects.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Ngo => "ngo",
        }
    }

    /// Upper-case badge label shown next to the user name.
    pub fn label(self) -> &'static str {
        match self {
            Role::Donor => "DONOR",
            Role::Ngo => "NGO",
        }
    }

    /// Parse a wire value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "donor" => Some(Role::Donor),
            "ngo" => Some(Role::Ngo),
            _ => None,
        }
    }
}

/// Identity returned at login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub organization_name: Option<String>,
}

impl UserInfo {
    /// Organization name when set and non-empty, else the username.
    pub fn display_name(&self) -> &str {
        match self.organization_name.as_deref() {
            Some(org) if !org.trim().is_empty() => org,
            _ => &self.username,
        }
    }
}

/// Full profile from `GET /auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl From<UserProfile> for UserInfo {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
            role: profile.role,
            organization_name: profile.organization_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(org: Option<&str>) -> UserInfo {
        UserInfo {
            id: 1,
            username: "kitchen42".to_string(),
            email: "k@example.org".to_string(),
            role: Role::Ngo,
            organization_name: org.map(str::to_string),
        }
    }

    #[test]
    fn test_display_name_prefers_organization() {
        assert_eq!(user(Some("Community Kitchen")).display_name(), "Community Kitchen");
        assert_eq!(user(Some("  ")).display_name(), "kitchen42");
        assert_eq!(user(None).display_name(), "kitchen42");
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::json!({
            "id": 3,
            "username": "bakery",
            "email": "b@example.org",
            "role": "donor",
            "organization_name": ""
        });
        let info: UserInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.role, Role::Donor);
        assert_eq!(Role::parse(info.role.as_str()), Some(Role::Donor));
        assert_eq!(Role::parse("admin"), None);
    }
}
