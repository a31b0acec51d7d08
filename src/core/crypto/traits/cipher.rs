/*!
Traits for classical cipher transforms.

This module defines the interface every cipher implements.
*/

use crate::core::crypto::types::{CipherAlgorithm, CipherKey, Mode};
use crate::core::error::Result;
use crate::core::trace::TransformResult;

/// Trait for classical cipher operations
///
/// Implementations hold no state: every call validates its key, builds its
/// own trace and returns it inside the result.
pub trait ClassicalCipher: Send + Sync {
    /// Encrypt text with the cipher
    fn encrypt(&self, plaintext: &str, key: &CipherKey) -> Result<TransformResult>;

    /// Decrypt text with the cipher
    fn decrypt(&self, ciphertext: &str, key: &CipherKey) -> Result<TransformResult>;

    /// Get the algorithm being used
    fn algorithm(&self) -> CipherAlgorithm;

    /// Encrypt or decrypt depending on `mode`
    fn apply(&self, mode: Mode, text: &str, key: &CipherKey) -> Result<TransformResult> {
        match mode {
            Mode::Encrypt => self.encrypt(text, key),
            Mode::Decrypt => self.decrypt(text, key),
        }
    }
}
