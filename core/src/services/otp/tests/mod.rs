//! Unit tests for the OTP lifecycle manager

mod service_tests;
