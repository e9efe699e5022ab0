//! User infrastructure module
//!
//! Provides the in-memory user store and the account service that implements
//! sign-up, sign-in and profile lookup on top of it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{RegisterRequest, SignInRequest, UserService};
