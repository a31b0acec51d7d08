/*!
Core types for cipher selection.

This module provides the algorithm and mode enums and the key type
shared by every cipher.
*/

pub mod algorithms;
pub mod key;

// Re-export core types for easier access
pub use algorithms::{CipherAlgorithm, Mode};
pub use key::CipherKey;
