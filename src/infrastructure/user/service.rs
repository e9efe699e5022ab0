//! Account service - sign-up, sign-in and profile lookup

use std::sync::Arc;

use crate::domain::user::{required, User, UserId, UserProfile, UserRepository};
use crate::domain::DomainError;

/// Request for registering a new user.
///
/// Fields arrive as they were sent: a key the client omitted is `None`, and
/// presence is decided here rather than at deserialization time.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Request for signing in
#[derive(Debug, Clone, Default)]
pub struct SignInRequest {
    pub id: Option<String>,
    pub password: Option<String>,
}

/// Account service owning the user store
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new account service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new user.
    ///
    /// All four fields must be present and non-empty, and the id must be
    /// unused. Returns the id of the created record.
    pub async fn register(&self, request: RegisterRequest) -> Result<UserId, DomainError> {
        let id = required(request.id.as_deref())
            .map_err(|_| DomainError::validation("null value"))?;
        let name = required(request.name.as_deref())
            .map_err(|_| DomainError::validation("null value"))?;
        let password = required(request.password.as_deref())
            .map_err(|_| DomainError::validation("null value"))?;
        let email = required(request.email.as_deref())
            .map_err(|_| DomainError::validation("null value"))?;

        let user_id =
            UserId::new(id).map_err(|_| DomainError::validation("null value"))?;

        if self.repository.exists(&user_id).await? {
            return Err(DomainError::conflict("already exists"));
        }

        let user = User::new(user_id, name, password, email);
        let created = self.repository.create(user).await?;

        Ok(created.id().clone())
    }

    /// Authenticate a user by id and password.
    ///
    /// Checks run in order and stop at the first failure: missing
    /// credentials, unknown id, then password comparison.
    pub async fn authenticate(&self, request: SignInRequest) -> Result<UserId, DomainError> {
        let id = required(request.id.as_deref())
            .map_err(|_| DomainError::validation("login fail"))?;
        let password = required(request.password.as_deref())
            .map_err(|_| DomainError::validation("login fail"))?;

        let user_id = UserId::new(id).map_err(|_| DomainError::validation("login fail"))?;

        let user = self
            .repository
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("no user"))?;

        if !user.password_matches(password) {
            return Err(DomainError::password_mismatch("password mismatch"));
        }

        Ok(user.id().clone())
    }

    /// Read a user's profile. The projection never includes the password.
    pub async fn profile(&self, id: &str) -> Result<UserProfile, DomainError> {
        let user_id = UserId::new(id).map_err(|_| DomainError::not_found("no user"))?;

        let user = self
            .repository
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("no user"))?;

        Ok(UserProfile::from(&user))
    }

    /// Count stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
