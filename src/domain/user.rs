use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed-in user as returned by `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
    pub email: String,
    pub token: String,
}

/// Public part of a user, embedded in reviews and offer hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreview {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
}

impl From<&User> for UserPreview {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            is_pro: user.is_pro,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Whether the session is known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationStatus {
    Auth,
    NoAuth,
    /// Initial check not resolved yet, or a logout failed half-way.
    #[default]
    Unknown,
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => write!(f, "AUTH"),
            Self::NoAuth => write!(f, "NO_AUTH"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
