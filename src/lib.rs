//! Account Service
//!
//! A minimal user-account web service exposing sign-up, sign-in and profile
//! lookup over HTTP, backed by an in-memory user store.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state with the in-memory user store.
///
/// The store starts empty and lives for the lifetime of the process.
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    AppState::new(user_service)
}
