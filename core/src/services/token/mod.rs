//! Session token module
//!
//! Mints the signed access/refresh token pair after successful
//! authentication and describes the cookie attributes the tokens are
//! transported under.

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenService;
