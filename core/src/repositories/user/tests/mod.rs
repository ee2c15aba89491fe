//! Unit tests for the user repository mock
