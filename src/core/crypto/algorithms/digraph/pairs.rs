/*!
Splitting text into digraphs.

Plaintext is segmented with filler rules: a doubled letter is split by
pairing the first copy with the filler, and a lone trailing letter is
padded with it. Ciphertext is split into raw consecutive pairs.
*/

use std::fmt;

use super::key_square::fold_letter;
use crate::core::constants::digraph::FILLER;
use crate::core::error::{Error, Result};

/// An ordered pair of square letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph(pub char, pub char);

impl Digraph {
    /// Check if the second letter is the filler
    pub fn ends_with_filler(&self) -> bool {
        self.1 == FILLER
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Letters only, uppercased, with 'J' folded into 'I'
pub fn sanitize(text: &str) -> Vec<char> {
    text.chars().filter_map(fold_letter).collect()
}

/// Segment plaintext into digraphs using the filler rules
pub fn prepare_plaintext(text: &str) -> Vec<Digraph> {
    let letters = sanitize(text);
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push(Digraph(first, second));
                i += 2;
            }
            // doubled letter, or nothing left to pair with
            _ => {
                pairs.push(Digraph(first, FILLER));
                i += 1;
            }
        }
    }
    pairs
}

/// Split ciphertext into consecutive pairs, as-is
pub fn split_ciphertext(text: &str) -> Result<Vec<Digraph>> {
    let letters = sanitize(text);
    if letters.len() % 2 != 0 {
        return Err(Error::MalformedCiphertext {
            letters: letters.len(),
        });
    }
    Ok(letters
        .chunks_exact(2)
        .map(|pair| Digraph(pair[0], pair[1]))
        .collect())
}
