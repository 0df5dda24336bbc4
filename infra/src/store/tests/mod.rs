//! Tests for record store implementations

#[cfg(test)]
mod memory_store_tests;
