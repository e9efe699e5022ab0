//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::domain::{DomainError, UserId, UserProfile};
use crate::infrastructure::user::{RegisterRequest, SignInRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<UserId, DomainError>;
    async fn authenticate(&self, request: SignInRequest) -> Result<UserId, DomainError>;
    async fn profile(&self, id: &str) -> Result<UserProfile, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn register(&self, request: RegisterRequest) -> Result<UserId, DomainError> {
        UserService::register(self, request).await
    }

    async fn authenticate(&self, request: SignInRequest) -> Result<UserId, DomainError> {
        UserService::authenticate(self, request).await
    }

    async fn profile(&self, id: &str) -> Result<UserProfile, DomainError> {
        UserService::profile(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}

impl AppState {
    /// Create new application state with the provided service
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}
