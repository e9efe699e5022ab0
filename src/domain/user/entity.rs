//! User record and related types

use serde::{Deserialize, Serialize};

use super::validation::UserValidationError;

/// Canonical user identifier.
///
/// The wire format carries ids as free-form strings; normalizing them into
/// this newtype at the boundary means every comparison below it is exact
/// string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId; the empty string is rejected
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();

        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }

        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's stored account data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Display name
    name: String,
    /// Stored password - never exposed in serialization
    #[serde(skip_serializing)]
    password: String,
    /// Contact email
    email: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check a submitted password against the stored one
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Read-only projection of a user record, safe to hand to clients.
///
/// Carries everything a profile read returns and nothing else; the password
/// never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: &str) -> User {
        let user_id = UserId::new(id).unwrap();
        User::new(user_id, "Ann", "p1", "a@x.com")
    }

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(id.as_str(), "u1");
    }

    #[test]
    fn test_user_id_empty() {
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn test_user_id_exact_equality() {
        assert_eq!(UserId::new("u1").unwrap(), UserId::new("u1").unwrap());
        assert_ne!(UserId::new("u1").unwrap(), UserId::new("U1").unwrap());
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user("u1");

        assert_eq!(user.id().as_str(), "u1");
        assert_eq!(user.name(), "Ann");
        assert_eq!(user.email(), "a@x.com");
    }

    #[test]
    fn test_password_matches() {
        let user = create_test_user("u1");

        assert!(user.password_matches("p1"));
        assert!(!user.password_matches("wrong"));
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user("u1");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("p1"));
    }

    #[test]
    fn test_profile_projection() {
        let user = create_test_user("u1");
        let profile = UserProfile::from(&user);

        assert_eq!(profile.id.as_str(), "u1");
        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.email, "a@x.com");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("p1"));
    }
}
