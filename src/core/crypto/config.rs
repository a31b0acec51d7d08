/*!
Cipher configuration.

This module bundles the algorithm choice with the caller-level options a
presentation layer applies on top of the raw transforms.
*/

use crate::core::crypto::algorithms::DigraphCipher;
use crate::core::crypto::registry;
use crate::core::crypto::types::{CipherAlgorithm, CipherKey, Mode};
use crate::core::error::{config_err, Result};
use crate::core::trace::TransformResult;

/// Configuration for running a cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CipherConfig {
    /// Cipher to run
    pub algorithm: CipherAlgorithm,
    /// Remove one trailing filler 'X' from digraph decrypt output
    ///
    /// Only the output string changes; the step trace keeps every pair.
    pub strip_trailing_filler: bool,
}

impl CipherConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for a specific algorithm
    pub fn with_algorithm(algorithm: CipherAlgorithm) -> Self {
        Self {
            algorithm,
            strip_trailing_filler: false,
        }
    }

    /// Create a configuration from an algorithm name
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::with_algorithm(registry::lookup(name)?))
    }

    /// Configuration matching the reference interface for `algorithm`
    ///
    /// Digraph decrypts drop the trailing filler; other ciphers are unchanged.
    pub fn reference_ui(algorithm: CipherAlgorithm) -> Self {
        Self {
            algorithm,
            strip_trailing_filler: algorithm == CipherAlgorithm::Digraph,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.strip_trailing_filler && self.algorithm != CipherAlgorithm::Digraph {
            return config_err(format!(
                "strip_trailing_filler only applies to the {} cipher, not {}",
                CipherAlgorithm::Digraph.name(),
                self.algorithm.name()
            ));
        }
        Ok(())
    }

    /// Encrypt with the configured algorithm
    pub fn encrypt<K: Into<CipherKey>>(&self, plaintext: &str, key: K) -> Result<TransformResult> {
        self.apply(Mode::Encrypt, plaintext, key)
    }

    /// Decrypt with the configured algorithm
    pub fn decrypt<K: Into<CipherKey>>(&self, ciphertext: &str, key: K) -> Result<TransformResult> {
        self.apply(Mode::Decrypt, ciphertext, key)
    }

    /// Run the configured algorithm in the given direction
    pub fn apply<K: Into<CipherKey>>(
        &self,
        mode: Mode,
        text: &str,
        key: K,
    ) -> Result<TransformResult> {
        self.validate()?;
        let mut result = self.algorithm.apply(mode, text, key)?;
        if self.strip_trailing_filler && mode == Mode::Decrypt {
            let output = result.output_mut();
            let kept = DigraphCipher::strip_trailing_filler(output).len();
            output.truncate(kept);
        }
        Ok(result)
    }
}
