/*!
Playfair digraph-substitution cipher.

Text is reduced to letters, split into pairs and each pair is substituted
through a 5x5 key square by one of three geometric rules:

- same row: take the neighbor to the right (left when decrypting)
- same column: take the neighbor below (above when decrypting)
- otherwise: swap columns across the rectangle the two letters span

Results carry the key square, and every step carries the four cells it
touched, so the substitution can be replayed on a drawn grid.
*/

mod key_square;
mod pairs;

pub use key_square::KeySquare;
pub use pairs::{prepare_plaintext, split_ciphertext, Digraph};

use crate::core::constants::digraph::{FILLER, SQUARE_SIZE};
use crate::core::crypto::traits::ClassicalCipher;
use crate::core::crypto::types::{CipherAlgorithm, CipherKey, Mode};
use crate::core::error::{Error, Result};
use crate::core::trace::{DigraphRule, GridPos, StepRecord, StepTrace, TransformResult};

/// Playfair cipher implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct DigraphCipher;

/// Outcome of substituting one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Substitution {
    output: Digraph,
    rule: DigraphRule,
    coordinates: [GridPos; 4],
}

impl DigraphCipher {
    /// Create a new digraph cipher
    pub fn new() -> Self {
        Self
    }

    /// Digraph sequence that encryption would process for `plaintext`
    pub fn prepare(&self, plaintext: &str) -> Vec<Digraph> {
        prepare_plaintext(plaintext)
    }

    /// Drop one trailing filler letter, if present
    ///
    /// Decrypting text whose last pair was padded leaves the filler in
    /// place; callers that want the cleaner rendering can strip it here.
    pub fn strip_trailing_filler(text: &str) -> &str {
        text.strip_suffix(FILLER).unwrap_or(text)
    }

    fn transform(
        &self,
        square: KeySquare,
        pairs: &[Digraph],
        mode: Mode,
    ) -> Result<TransformResult> {
        let mut output = String::with_capacity(pairs.len() * 2);
        let mut steps = StepTrace::with_capacity(pairs.len());

        for &pair in pairs {
            let sub = substitute(&square, pair, mode)?;
            output.push(sub.output.0);
            output.push(sub.output.1);
            steps.push(StepRecord::digraph(
                mode,
                pair.to_string(),
                sub.output.to_string(),
                sub.rule,
                sub.coordinates,
            ));
        }

        Ok(
            TransformResult::new(CipherAlgorithm::Digraph, mode, output, steps)
                .with_key_square(square),
        )
    }
}

impl ClassicalCipher for DigraphCipher {
    fn encrypt(&self, plaintext: &str, key: &CipherKey) -> Result<TransformResult> {
        let square = KeySquare::new(&key.as_text())?;
        let pairs = prepare_plaintext(plaintext);
        self.transform(square, &pairs, Mode::Encrypt)
    }

    fn decrypt(&self, ciphertext: &str, key: &CipherKey) -> Result<TransformResult> {
        let square = KeySquare::new(&key.as_text())?;
        let pairs = split_ciphertext(ciphertext)?;
        self.transform(square, &pairs, Mode::Decrypt)
    }

    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Digraph
    }
}

/// Apply the row, column or rectangle rule to one pair
fn substitute(square: &KeySquare, pair: Digraph, mode: Mode) -> Result<Substitution> {
    let locate = |letter: char| {
        square
            .position_of(letter)
            .ok_or_else(|| Error::Internal(format!("letter {:?} missing from key square", letter)))
    };
    let a = locate(pair.0)?;
    let b = locate(pair.1)?;

    // one step forward, or one step back modulo the square size
    let step = match mode {
        Mode::Encrypt => 1,
        Mode::Decrypt => SQUARE_SIZE - 1,
    };

    let (rule, new_a, new_b) = if a.row == b.row {
        (
            DigraphRule::SameRow,
            GridPos::new(a.row, (a.col + step) % SQUARE_SIZE),
            GridPos::new(b.row, (b.col + step) % SQUARE_SIZE),
        )
    } else if a.col == b.col {
        (
            DigraphRule::SameColumn,
            GridPos::new((a.row + step) % SQUARE_SIZE, a.col),
            GridPos::new((b.row + step) % SQUARE_SIZE, b.col),
        )
    } else {
        (
            DigraphRule::Rectangle,
            GridPos::new(a.row, b.col),
            GridPos::new(b.row, a.col),
        )
    };

    Ok(Substitution {
        output: Digraph(square.cell(new_a), square.cell(new_b)),
        rule,
        coordinates: [a, b, new_a, new_b],
    })
}
