//! Response assembly helpers

pub mod error;
