/*!
Constants for the cipher suite.

Alphabet sizes, the digraph filler letter and key-square geometry.
*/

/// Number of letters in the alphabet ring
pub const ALPHABET_LEN: u8 = 26;

/// The full Latin alphabet in natural order
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digraph constants
pub mod digraph {
    /// Letter injected between doubled letters and used to pad odd input
    pub const FILLER: char = 'X';

    /// Letter folded into [`MERGED_INTO`] before any digraph processing
    pub const MERGED_LETTER: char = 'J';

    /// Letter that absorbs [`MERGED_LETTER`]
    pub const MERGED_INTO: char = 'I';

    /// Rows and columns of the key square
    pub const SQUARE_SIZE: usize = 5;

    /// Number of cells in the key square
    pub const SQUARE_CELLS: usize = SQUARE_SIZE * SQUARE_SIZE;

    /// The 25-letter alphabet used to fill the key square (no 'J')
    pub const SQUARE_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";
}
