//! Tests for delivery channel implementations
