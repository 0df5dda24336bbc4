//! Salted one-way hash of a passcode
//!
//! Passcodes are never stored in plaintext. Each record keeps a
//! per-record random salt and the SHA-256 digest of `salt || code`;
//! verification recomputes the digest for the submitted code and
//! compares in constant time.

use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::errors::{OtpError, OtpResult};

/// Length of the per-record random salt in bytes
const SALT_LENGTH: usize = 16;

/// Salted SHA-256 digest of a passcode
#[derive(Clone, PartialEq, Eq)]
pub struct CodeHash {
    salt: [u8; SALT_LENGTH],
    digest: [u8; 32],
}

impl CodeHash {
    /// Hash a passcode with a fresh random salt
    ///
    /// Fails with [`OtpError::RandomSource`] if the OS random source
    /// cannot produce a salt.
    pub fn new(code: &str) -> OtpResult<Self> {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| OtpError::RandomSource {
                message: e.to_string(),
            })?;

        Ok(Self {
            digest: Self::digest_with_salt(&salt, code),
            salt,
        })
    }

    /// Check a submitted passcode against the stored digest
    ///
    /// The digest comparison is constant-time so the match does not
    /// leak which positions of the code were correct.
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate_digest = Self::digest_with_salt(&self.salt, candidate);
        constant_time_eq(&self.digest, &candidate_digest)
    }

    fn digest_with_salt(salt: &[u8; SALT_LENGTH], code: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(code.as_bytes());
        hasher.finalize().into()
    }
}

// A 6-digit code space is small enough to brute-force offline, so the
// digest itself must stay out of logs and debug output.
impl std::fmt::Debug for CodeHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CodeHash(..)")
    }
}
