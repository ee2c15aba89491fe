//! Value objects returned by the auth flows.

pub mod auth_response;

pub use auth_response::{LoginOutcome, UserSummary};
