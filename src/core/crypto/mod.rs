/*!
Cipher components.

This module provides the cipher interface, the three cipher
implementations, algorithm selection and configuration.
*/

// Cipher implementations
pub mod algorithms;

// Cipher interface
pub mod traits;

// Algorithm, mode and key types
pub mod types;

// Config
pub mod config;

// Registry for name lookup
pub mod registry;

// Re-export frequently used types
pub use algorithms::{create_cipher, DigraphCipher, PolyalphabeticCipher, ShiftCipher};
pub use algorithms::digraph::{Digraph, KeySquare};
pub use config::CipherConfig;
pub use registry::{get_algorithm, get_registry, list_algorithms, lookup};
pub use traits::ClassicalCipher;
pub use types::{CipherAlgorithm, CipherKey, Mode};
