/*!
Vigenère polyalphabetic cipher.

Each letter is rotated by the ring position of the current key letter. The
key only advances when a letter of the text is consumed, so spaces and
punctuation neither use up key letters nor show up in the trace.
*/

use crate::core::alphabet;
use crate::core::crypto::traits::ClassicalCipher;
use crate::core::crypto::types::{CipherAlgorithm, CipherKey, Mode};
use crate::core::error::{invalid_key, Result};
use crate::core::trace::{StepRecord, StepTrace, TransformResult};

/// Vigenère cipher implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct PolyalphabeticCipher;

/// A key letter as written, with its shift
type KeyLetter = (char, u8);

impl PolyalphabeticCipher {
    /// Create a new polyalphabetic cipher
    pub fn new() -> Self {
        Self
    }

    fn transform(&self, text: &str, key: &[KeyLetter], mode: Mode) -> TransformResult {
        let mut output = String::with_capacity(text.len());
        let mut steps = StepTrace::with_capacity(text.len());
        let mut key_index = 0usize;

        for c in text.chars() {
            if !alphabet::is_letter(c) {
                output.push(c);
                continue;
            }
            let (key_letter, shift) = key[key_index % key.len()];
            let signed = match mode {
                Mode::Encrypt => shift as i64,
                Mode::Decrypt => -(shift as i64),
            };
            let moved = alphabet::shift_letter(c, signed).unwrap_or(c);
            steps.push(StepRecord::keyed(mode, c, moved, key_letter, shift));
            output.push(moved);
            key_index += 1;
        }

        TransformResult::new(CipherAlgorithm::Polyalphabetic, mode, output, steps)
    }
}

impl ClassicalCipher for PolyalphabeticCipher {
    fn encrypt(&self, plaintext: &str, key: &CipherKey) -> Result<TransformResult> {
        let key = key_letters(key)?;
        Ok(self.transform(plaintext, &key, Mode::Encrypt))
    }

    fn decrypt(&self, ciphertext: &str, key: &CipherKey) -> Result<TransformResult> {
        let key = key_letters(key)?;
        Ok(self.transform(ciphertext, &key, Mode::Decrypt))
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Polyalphabetic
    }
}

/// Letters of the key in order; non-letters are skipped
fn key_letters(key: &CipherKey) -> Result<Vec<KeyLetter>> {
    let name = CipherAlgorithm::Polyalphabetic.name();
    if key.is_empty() {
        return invalid_key(format!("Key for {} Cipher cannot be empty", name));
    }

    let letters: Vec<KeyLetter> = key
        .as_text()
        .chars()
        .filter_map(|c| alphabet::position(c).map(|pos| (c, pos)))
        .collect();
    if letters.is_empty() {
        return invalid_key(format!(
            "Key for {} Cipher must contain at least one letter",
            name
        ));
    }
    Ok(letters)
}
