//! Variable identifiers for the puzzle CSP.
//!
//! A puzzle has two kinds of variables: the letters of the words, and the
//! synthetic carries linking neighbouring columns. Both live in one ordered
//! namespace so that tie-breaking and iteration are reproducible: every letter
//! sorts before every carry, letters alphabetically, carries by column index.

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::puzzle_char::PuzzleChar;

/// A CSP variable: a puzzle letter or the carry into column `i`.
///
/// `Carry(0)` is the carry into the least-significant column and is always 0.
/// Column `i` reads `Carry(i)` and writes `Carry(i + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Var {
    Letter(char),
    Carry(usize),
}

impl Var {
    /// Build a letter variable.
    ///
    /// # Panics
    /// Panics if `c` is not in `'A'..='Z'`. Words are validated before any
    /// variable is created, so this indicates a bug in the model builder.
    #[must_use]
    pub fn letter(c: char) -> Self {
        assert!(c.is_puzzle_letter(), "Invalid letter variable: '{c}' (puzzle should have validated this)");
        Var::Letter(c)
    }

    #[must_use]
    pub fn carry(column: usize) -> Self {
        Var::Carry(column)
    }

    /// Letters take part in the all-different rule; carries never do.
    #[must_use]
    pub fn is_letter(&self) -> bool {
        matches!(self, Var::Letter(_))
    }

    #[must_use]
    pub fn is_carry(&self) -> bool {
        matches!(self, Var::Carry(_))
    }
}

/// Letters print as themselves (`S`), carries as `C<i>` (`C3`).
impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Var::Letter(c) => write!(f, "{c}"),
            Var::Carry(i) => write!(f, "C{i}"),
        }
    }
}
