//! Credential verification module: registration payload validation and
//! adaptive password hashing.

mod service;

pub use service::{CredentialService, RegistrationData};
