/*!
# Classical Ciphers

Caesar, Vigenère and Playfair ciphers whose transforms return a replayable
trace of every substitution they made.

## Overview

Each cipher exposes `encrypt` and `decrypt`. A call returns a
[`TransformResult`] holding:

- the final text
- an ordered [`StepTrace`], one record per letter (or per pair for Playfair)
- for Playfair, the 5x5 [`KeySquare`] and the grid cells each pair touched

Nothing is kept between calls, so a presentation layer can animate the
steps of one result while other calls run independently.

```
use classical_ciphers::{CipherAlgorithm, Mode};

let result = CipherAlgorithm::Shift.encrypt("HELLO", 3).unwrap();
assert_eq!(result.output(), "KHOOR");
assert_eq!(result.steps()[0].to_string(), "H -> K (Shift 3)");

let cipher: CipherAlgorithm = "playfair".parse().unwrap();
let result = cipher.apply(Mode::Encrypt, "INSTRUMENTS", "MONARCHY").unwrap();
assert_eq!(result.output(), "GATLMZCLRQXA");
```

These ciphers are historical curiosities and provide no real secrecy.
*/

// Core components
pub mod core;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Re-export commonly used types for convenience
pub use crate::core::alphabet;
pub use crate::core::error::{Error, Result};
pub use crate::core::trace::{
    DigraphRule, GridPos, StepKind, StepRecord, StepTrace, TransformResult,
};

// Re-export ciphers and selection
pub use crate::core::crypto::{
    create_cipher, get_algorithm, list_algorithms, lookup, CipherAlgorithm, CipherConfig,
    CipherKey, ClassicalCipher, Digraph, DigraphCipher, KeySquare, Mode, PolyalphabeticCipher,
    ShiftCipher,
};
