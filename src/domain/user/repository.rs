//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for the user store
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id; first match wins on the insertion-ordered store
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Append a new user. Fails with a conflict if the id is already taken;
    /// the uniqueness check and the append happen atomically.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// List all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user id exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
