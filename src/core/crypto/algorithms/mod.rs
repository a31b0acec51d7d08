/*!
Implementations of the classical ciphers.

This module provides the concrete types behind the
[`ClassicalCipher`] interface.
*/

// Caesar
pub mod shift;

// Vigenère
pub mod polyalphabetic;

// Playfair
pub mod digraph;

pub use digraph::DigraphCipher;
pub use polyalphabetic::PolyalphabeticCipher;
pub use shift::ShiftCipher;

use crate::core::crypto::traits::ClassicalCipher;
use crate::core::crypto::types::CipherAlgorithm;

/// Create a cipher for the specified algorithm
pub fn create_cipher(algorithm: CipherAlgorithm) -> Box<dyn ClassicalCipher> {
    match algorithm {
        CipherAlgorithm::Shift => Box::new(ShiftCipher::new()),
        CipherAlgorithm::Polyalphabetic => Box::new(PolyalphabeticCipher::new()),
        CipherAlgorithm::Digraph => Box::new(DigraphCipher::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cipher_matches_algorithm() {
        for algorithm in CipherAlgorithm::all() {
            assert_eq!(create_cipher(algorithm).algorithm(), algorithm);
        }
    }
}
