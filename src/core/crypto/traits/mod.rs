/*!
Core traits for cipher operations.
*/

pub mod cipher;

// Re-export core traits for easier access
pub use cipher::ClassicalCipher;
