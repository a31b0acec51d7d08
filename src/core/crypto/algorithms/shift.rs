/*!
Caesar shift cipher.

Every ASCII letter moves a fixed number of positions around the alphabet
ring, keeping its case. Other characters are copied through and not traced.
*/

use crate::core::alphabet;
use crate::core::constants::ALPHABET_LEN;
use crate::core::crypto::traits::ClassicalCipher;
use crate::core::crypto::types::{CipherAlgorithm, CipherKey, Mode};
use crate::core::error::{invalid_key, Result};
use crate::core::trace::{StepRecord, StepTrace, TransformResult};

/// Caesar cipher implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftCipher;

impl ShiftCipher {
    /// Create a new shift cipher
    pub fn new() -> Self {
        Self
    }

    /// Encrypt with an integer shift; any value is reduced modulo 26
    pub fn encrypt_with_shift(&self, plaintext: &str, shift: i64) -> TransformResult {
        self.transform(plaintext, alphabet::normalize_shift(shift), Mode::Encrypt)
    }

    /// Decrypt with an integer shift; any value is reduced modulo 26
    pub fn decrypt_with_shift(&self, ciphertext: &str, shift: i64) -> TransformResult {
        self.transform(ciphertext, alphabet::normalize_shift(shift), Mode::Decrypt)
    }

    fn transform(&self, text: &str, shift: u8, mode: Mode) -> TransformResult {
        let signed = match mode {
            Mode::Encrypt => shift as i64,
            Mode::Decrypt => -(shift as i64),
        };

        let mut output = String::with_capacity(text.len());
        let mut steps = StepTrace::with_capacity(text.len());
        for c in text.chars() {
            match alphabet::shift_letter(c, signed) {
                Some(moved) => {
                    steps.push(StepRecord::shift(mode, c, moved, shift));
                    output.push(moved);
                }
                None => output.push(c),
            }
        }

        TransformResult::new(CipherAlgorithm::Shift, mode, output, steps)
    }
}

impl ClassicalCipher for ShiftCipher {
    fn encrypt(&self, plaintext: &str, key: &CipherKey) -> Result<TransformResult> {
        let shift = parse_shift(key)?;
        Ok(self.transform(plaintext, shift, Mode::Encrypt))
    }

    fn decrypt(&self, ciphertext: &str, key: &CipherKey) -> Result<TransformResult> {
        let shift = parse_shift(key)?;
        Ok(self.transform(ciphertext, shift, Mode::Decrypt))
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Shift
    }
}

/// Reduce a key to a shift in `[0, 26)`
///
/// Text keys are decimal integers with an optional sign and surrounding
/// whitespace. The reduction runs digit by digit, so integers of any length
/// are accepted.
pub(crate) fn parse_shift(key: &CipherKey) -> Result<u8> {
    let text = match key {
        CipherKey::Number(n) => return Ok(alphabet::normalize_shift(*n)),
        CipherKey::Text(text) => text.trim(),
    };

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return invalid_key(format!(
            "Key for {} Cipher must be an integer, got {:?}",
            CipherAlgorithm::Shift.name(),
            text
        ));
    }

    let modulus = ALPHABET_LEN as u32;
    let magnitude = digits
        .bytes()
        .fold(0u32, |acc, b| (acc * 10 + (b - b'0') as u32) % modulus);
    let shift = if negative {
        (modulus - magnitude) % modulus
    } else {
        magnitude
    };
    Ok(shift as u8)
}
