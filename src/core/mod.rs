//! Core components of the cipher suite.
//!
//! This module contains the alphabet model, the ciphers themselves, the
//! step trace they produce and error handling.

// Export cipher functionality
pub mod crypto;

// Alphabet ring and case model
pub mod alphabet;

// Step traces and transform results
pub mod trace;

// Suite constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result};
pub use self::trace::{DigraphRule, GridPos, StepKind, StepRecord, StepTrace, TransformResult};
