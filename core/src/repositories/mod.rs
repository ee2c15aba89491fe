//! Repository interfaces for external persistence collaborators.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
