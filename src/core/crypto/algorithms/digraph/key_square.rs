/*!
The 5x5 Playfair key square.

Key letters come first, deduplicated in first-seen order with 'J' folded
into 'I'. The rest of the 25-letter alphabet follows in natural order.
*/

use std::fmt;

use crate::core::alphabet;
use crate::core::constants::ALPHABET_LEN;
use crate::core::constants::digraph::{
    MERGED_INTO, MERGED_LETTER, SQUARE_ALPHABET, SQUARE_CELLS, SQUARE_SIZE,
};
use crate::core::error::{invalid_key, Result};
use crate::core::trace::GridPos;

/// A 5x5 grid holding every letter except 'J' exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; SQUARE_SIZE]; SQUARE_SIZE],
    positions: [Option<GridPos>; ALPHABET_LEN as usize],
}

impl KeySquare {
    /// Build the key square for `key`
    ///
    /// An empty key is rejected. A key without letters gives the plain
    /// alphabet square.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return invalid_key("Key for Playfair Cipher cannot be empty");
        }
        Ok(Self::from_key(key))
    }

    pub(crate) fn from_key(key: &str) -> Self {
        let mut seen = [false; ALPHABET_LEN as usize];
        let mut order = Vec::with_capacity(SQUARE_CELLS);

        let key_letters = key.chars().filter_map(fold_letter);
        for letter in key_letters.chain(SQUARE_ALPHABET.chars()) {
            let Some(pos) = alphabet::position(letter) else {
                continue;
            };
            if !seen[pos as usize] {
                seen[pos as usize] = true;
                order.push(letter);
            }
        }

        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        let mut positions = [None; ALPHABET_LEN as usize];
        for (i, &letter) in order.iter().enumerate() {
            let cell = GridPos::new(i / SQUARE_SIZE, i % SQUARE_SIZE);
            cells[cell.row][cell.col] = letter;
            if let Some(pos) = alphabet::position(letter) {
                positions[pos as usize] = Some(cell);
            }
        }

        log::trace!("built key square {:?}", order.iter().collect::<String>());
        Self { cells, positions }
    }

    /// Rows of the square, top to bottom
    pub fn rows(&self) -> &[[char; SQUARE_SIZE]; SQUARE_SIZE] {
        &self.cells
    }

    /// All 25 letters in row-major order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Letter in a cell, or `None` outside the grid
    pub fn letter_at(&self, pos: GridPos) -> Option<char> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Cell holding `letter`
    ///
    /// Case-insensitive; 'J' resolves to the cell of 'I'.
    pub fn position_of(&self, letter: char) -> Option<GridPos> {
        let folded = fold_letter(letter)?;
        self.positions[alphabet::position(folded)? as usize]
    }

    pub(crate) fn cell(&self, pos: GridPos) -> char {
        self.cells[pos.row % SQUARE_SIZE][pos.col % SQUARE_SIZE]
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, letter) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Uppercase a letter and merge 'J' into 'I'; non-letters give `None`
pub(crate) fn fold_letter(c: char) -> Option<char> {
    if !alphabet::is_letter(c) {
        return None;
    }
    let upper = c.to_ascii_uppercase();
    Some(if upper == MERGED_LETTER { MERGED_INTO } else { upper })
}
