//! Cryptographically secure passcode generation

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::errors::{OtpError, OtpResult};

/// Generator for fixed-length numeric passcodes
///
/// Codes are drawn uniformly from the full zero-padded digit space
/// (`"000000"` through `"999999"` for six digits), so leading zeros
/// are as likely as any other prefix. `rand`'s range sampling on
/// `OsRng` provides the uniformity; formatting preserves the padding.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
    bound: u32,
}

impl CodeGenerator {
    /// Create a generator for codes of `length` digits
    ///
    /// Probes the OS random source once and fails with
    /// [`OtpError::RandomSource`] if it is unavailable, so a broken
    /// CSPRNG aborts startup instead of surfacing per request.
    pub fn new(length: usize) -> OtpResult<Self> {
        if length == 0 || length > 9 {
            return Err(OtpError::Internal {
                message: format!("unsupported code length: {}", length),
            });
        }

        let mut probe = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|e| OtpError::RandomSource {
                message: e.to_string(),
            })?;

        Ok(Self {
            length,
            bound: 10u32.pow(length as u32),
        })
    }

    /// Generate one passcode as a zero-padded numeric string
    pub fn generate(&self) -> String {
        let value = OsRng.gen_range(0..self.bound);
        format!("{:0width$}", value, width = self.length)
    }

    /// Configured code length in digits
    pub fn length(&self) -> usize {
        self.length
    }
}
