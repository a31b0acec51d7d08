/*!
The 26-letter alphabet ring shared by every cipher.

Only ASCII letters take part in the ring. Case is carried alongside each
letter and restored on output; it never changes the arithmetic. Anything
that is not an ASCII letter passes through untouched.
*/

use crate::core::constants::{ALPHABET, ALPHABET_LEN};

/// Check whether a character is a letter of the ring
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Position of a letter in the ring (A = 0 ... Z = 25), ignoring case
pub fn position(c: char) -> Option<u8> {
    if is_letter(c) {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Letter at a ring position, in the requested case
///
/// Positions wrap around the ring.
pub fn letter_at(pos: u8, uppercase: bool) -> char {
    let base = if uppercase { b'A' } else { b'a' };
    (base + pos % ALPHABET_LEN) as char
}

/// Reduce any integer shift into `[0, 26)`
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid keeps negative shifts in range
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Rotate a letter around the ring, keeping its case
///
/// Returns `None` for characters outside the ring.
pub fn shift_letter(c: char, shift: i64) -> Option<char> {
    let pos = position(c)?;
    let moved = (pos + normalize_shift(shift)) % ALPHABET_LEN;
    Some(letter_at(moved, c.is_ascii_uppercase()))
}

/// Keep only ring letters, uppercased
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| is_letter(*c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// The alphabet rotated left by `shift` positions
///
/// Lined up under the plain alphabet this is the substitution ribbon for
/// that shift: the letter below `A` is what `A` encrypts to.
pub fn shifted_alphabet(shift: i64) -> String {
    let start = normalize_shift(shift) as usize;
    let mut ribbon = String::with_capacity(ALPHABET.len());
    ribbon.push_str(&ALPHABET[start..]);
    ribbon.push_str(&ALPHABET[..start]);
    ribbon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_case_insensitive() {
        assert_eq!(position('A'), Some(0));
        assert_eq!(position('a'), Some(0));
        assert_eq!(position('Z'), Some(25));
        assert_eq!(position('m'), Some(12));
        assert_eq!(position('1'), None);
        assert_eq!(position('é'), None);
    }

    #[test]
    fn test_shift_letter_wraps_and_keeps_case() {
        assert_eq!(shift_letter('Z', 1), Some('A'));
        assert_eq!(shift_letter('a', -1), Some('z'));
        assert_eq!(shift_letter('h', 3), Some('k'));
        assert_eq!(shift_letter('H', 29), Some('K'));
        assert_eq!(shift_letter(' ', 3), None);
    }

    #[test]
    fn test_shift_letter_extreme_shifts() {
        // i64::MAX = 7 (mod 26), i64::MIN = 18 (mod 26)
        assert_eq!(shift_letter('Z', i64::MAX), Some('G'));
        assert_eq!(shift_letter('b', i64::MIN), Some('t'));
        assert_eq!(shift_letter('A', i64::MAX), Some('H'));
    }

    #[test]
    fn test_normalize_shift() {
        assert_eq!(normalize_shift(0), 0);
        assert_eq!(normalize_shift(26), 0);
        assert_eq!(normalize_shift(-1), 25);
        assert_eq!(normalize_shift(-27), 25);
        assert_eq!(normalize_shift(55), 3);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Hello, World! 123"), "HELLOWORLD");
        assert_eq!(sanitize("Ñandú"), "AND");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_shifted_alphabet() {
        assert_eq!(shifted_alphabet(0), ALPHABET);
        assert_eq!(shifted_alphabet(3), "DEFGHIJKLMNOPQRSTUVWXYZABC");
        assert_eq!(shifted_alphabet(-3), "XYZABCDEFGHIJKLMNOPQRSTUVW");
    }
}
