pub(crate) const ALPHABET_SIZE: usize = 26;

/// Radix of the arithmetic; also the number of distinct digits letters can take.
pub(crate) const BASE: u8 = 10;

pub(crate) trait PuzzleChar {
    fn is_puzzle_letter(&self) -> bool;
    /// 'A' -> 0, 'B' -> 1, ..., 'Z' -> 25; `None` for anything else
    fn letter_index(&self) -> Option<usize>;
}

impl PuzzleChar for char {
    fn is_puzzle_letter(&self) -> bool {
        self.is_ascii_uppercase()
    }

    fn letter_index(&self) -> Option<usize> {
        self.is_puzzle_letter().then(|| (*self as u8 - b'A') as usize)
    }
}

/// Render a digit as its character form ('0'..='9').
pub(crate) fn digit_char(digit: u8) -> char {
    debug_assert!(digit < BASE, "digit {digit} out of range");
    char::from(b'0' + digit)
}
