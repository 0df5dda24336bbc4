//! Tests for the OTP service

#[cfg(test)]
mod service_tests;
