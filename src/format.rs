//! Rendering a solved puzzle.
//!
//! Each word is rewritten with its letters replaced by their digits, in the
//! original word order. Only ever called with a complete solution.

use crate::assignment::Assignment;
use crate::puzzle::Puzzle;
use crate::puzzle_char::digit_char;
use crate::variable::Var;

/// Replace every letter of `word` by its digit (`?` for an unassigned letter).
fn word_to_digits(word: &str, assignment: &Assignment) -> String {
    word.chars()
        .map(|c| assignment.get(Var::letter(c)).map_or('?', digit_char))
        .collect()
}

/// One line per word: `["9567", "1085", "10652"]`.
#[must_use]
pub fn solution_lines(puzzle: &Puzzle, assignment: &Assignment) -> Vec<String> {
    puzzle.words().iter()
        .map(|w| word_to_digits(w, assignment))
        .collect()
}

/// The solution lines, each newline-terminated.
#[must_use]
pub fn solution_to_string(puzzle: &Puzzle, assignment: &Assignment) -> String {
    solution_lines(puzzle, assignment).iter()
        .map(|line| format!("{line}\n"))
        .collect()
}

/// `9567 + 1085 = 10652`
#[must_use]
pub fn equation_string(puzzle: &Puzzle, assignment: &Assignment) -> String {
    match solution_lines(puzzle, assignment).as_slice() {
        [addend1, addend2, sum] => format!("{addend1} + {addend2} = {sum}"),
        other => other.join(" "),
    }
}

/// `D=7 E=5 M=1 ...`, letters only
#[must_use]
pub fn letter_table(assignment: &Assignment) -> String {
    assignment.iter()
        .filter(|(var, _)| var.is_letter())
        .map(|(var, digit)| format!("{var}={digit}"))
        .collect::<Vec<_>>()
        .join(" ")
}
