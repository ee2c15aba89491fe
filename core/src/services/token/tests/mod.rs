//! Unit tests for the session token issuer

mod service_tests;
