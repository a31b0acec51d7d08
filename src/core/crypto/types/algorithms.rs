/*!
Algorithm type definitions.

The set of ciphers is closed, so it is modelled as an enum. Each variant
dispatches to the matching zero-sized cipher type.
*/

use std::fmt;
use std::str::FromStr;

use crate::core::crypto::algorithms::{DigraphCipher, PolyalphabeticCipher, ShiftCipher};
use crate::core::crypto::registry;
use crate::core::crypto::traits::ClassicalCipher;
use crate::core::crypto::types::key::CipherKey;
use crate::core::error::{Error, Result};
use crate::core::trace::TransformResult;

/// Supported classical ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherAlgorithm {
    /// Caesar shift over the alphabet ring
    #[default]
    Shift,
    /// Vigenère cipher with a repeating keyword
    Polyalphabetic,
    /// Playfair cipher over a 5x5 key square
    Digraph,
}

impl CipherAlgorithm {
    /// Every supported algorithm, in presentation order
    pub fn all() -> [CipherAlgorithm; 3] {
        [
            CipherAlgorithm::Shift,
            CipherAlgorithm::Polyalphabetic,
            CipherAlgorithm::Digraph,
        ]
    }

    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            CipherAlgorithm::Shift => "Caesar",
            CipherAlgorithm::Polyalphabetic => "Vigenère",
            CipherAlgorithm::Digraph => "Playfair",
        }
    }

    /// Variant identifier used for lookups
    pub fn identifier(&self) -> &'static str {
        match self {
            CipherAlgorithm::Shift => "shift",
            CipherAlgorithm::Polyalphabetic => "polyalphabetic",
            CipherAlgorithm::Digraph => "digraph",
        }
    }

    /// Check if results of this algorithm carry a key square
    pub fn uses_key_square(&self) -> bool {
        matches!(self, CipherAlgorithm::Digraph)
    }

    /// Encrypt `plaintext` with this algorithm
    pub fn encrypt<K: Into<CipherKey>>(&self, plaintext: &str, key: K) -> Result<TransformResult> {
        self.apply(Mode::Encrypt, plaintext, key)
    }

    /// Decrypt `ciphertext` with this algorithm
    pub fn decrypt<K: Into<CipherKey>>(&self, ciphertext: &str, key: K) -> Result<TransformResult> {
        self.apply(Mode::Decrypt, ciphertext, key)
    }

    /// Run this algorithm in the given direction
    pub fn apply<K: Into<CipherKey>>(
        &self,
        mode: Mode,
        text: &str,
        key: K,
    ) -> Result<TransformResult> {
        let key = key.into();
        match self {
            CipherAlgorithm::Shift => ShiftCipher.apply(mode, text, &key),
            CipherAlgorithm::Polyalphabetic => PolyalphabeticCipher.apply(mode, text, &key),
            CipherAlgorithm::Digraph => DigraphCipher.apply(mode, text, &key),
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        registry::get_algorithm(s).ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Plaintext to ciphertext
    #[default]
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl Mode {
    /// The opposite direction
    ///
    /// Feeding a result back through the toggled mode undoes it.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Encrypt => Mode::Decrypt,
            Mode::Decrypt => Mode::Encrypt,
        }
    }

    /// Get the name of the mode as a string
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Encrypt => "Encrypt",
            Mode::Decrypt => "Decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
