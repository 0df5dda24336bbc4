//! Domain value objects

pub mod code_hash;

pub use code_hash::CodeHash;
