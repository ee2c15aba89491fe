//! Unit tests for cache helpers

mod redis_client_tests;
