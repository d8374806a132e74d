use std::fmt;
use std::fmt::{Display, Formatter};

use crate::puzzle_char::{ALPHABET_SIZE, PuzzleChar};
use crate::variable::Var;

/// `Assignment` maps each variable to the digit it currently holds, if any.
///
/// Uses array-based storage for letters instead of a map since letters are
/// limited to 'A'-'Z'; carries are stored by column index. Every enumeration
/// is in [`Var`] order (letters alphabetically, then carries by index).
///
/// The search mutates one `Assignment` in place: [`set`](Self::set) on the way
/// down, [`remove`](Self::remove) on the way back up.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// index 0-25 for 'A'-'Z'
    letters: [Option<u8>; ALPHABET_SIZE],
    /// index i for carry `C<i>`
    carries: Vec<Option<u8>>,
}

impl Default for Assignment {
    fn default() -> Self {
        Self {
            letters: [None; ALPHABET_SIZE],
            carries: Vec::new(),
        }
    }
}

/// Two assignments are equal when they hold the same digits for the same
/// variables; unused carry slots do not matter.
impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Assignment {}

/// Convert a letter to an array index
///
/// # Panics
/// This function panics if `c` is not in 'A'..='Z'.
/// Letters are validated when the puzzle is built, so anything else here is a
/// programming error, not invalid user input.
#[inline]
fn letter_slot(c: char) -> usize {
    c.letter_index()
        .unwrap_or_else(|| panic!("Invalid letter variable: '{c}' (puzzle should have validated this)"))
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter()
            .map(|(var, digit)| format!("{var}={digit}"))
            .collect();
        write!(f, "[{}]", pairs.join(", "))
    }
}

impl Assignment {
    /// Assign `digit` to `var`, replacing any previous value.
    pub fn set(&mut self, var: Var, digit: u8) {
        *self.slot_mut(var) = Some(digit);
    }

    /// The digit held by `var`, or `None` if unassigned.
    #[must_use]
    pub fn get(&self, var: Var) -> Option<u8> {
        match var {
            Var::Letter(c) => self.letters[letter_slot(c)],
            Var::Carry(i) => self.carries.get(i).copied().flatten(),
        }
    }

    /// Return `var` to the unassigned state.
    pub fn remove(&mut self, var: Var) {
        match var {
            Var::Letter(c) => self.letters[letter_slot(c)] = None,
            Var::Carry(i) => {
                if let Some(slot) = self.carries.get_mut(i) {
                    *slot = None;
                }
            }
        }
    }

    #[must_use]
    pub fn is_assigned(&self, var: Var) -> bool {
        self.get(var).is_some()
    }

    /// Iterate over the assigned variables in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, u8)> + '_ {
        let letters = self.letters.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|digit| {
                let idx = u8::try_from(i)
                    .expect("slot index must fit in u8 (letters has 26 elements, max index is 25)");
                (Var::Letter((b'A' + idx) as char), digit)
            })
        });
        let carries = self.carries.iter().enumerate()
            .filter_map(|(i, slot)| slot.map(|digit| (Var::Carry(i), digit)));
        letters.chain(carries)
    }

    /// Is any letter other than `except` currently holding `digit`?
    /// Carries are ignored: they are exempt from the all-different rule.
    pub(crate) fn letter_holds(&self, digit: u8, except: Var) -> bool {
        self.iter()
            .any(|(var, held)| var.is_letter() && var != except && held == digit)
    }

    pub(crate) fn contains_all_vars(&self, vars: &[Var]) -> bool {
        vars.iter().all(|&var| self.is_assigned(var))
    }

    fn slot_mut(&mut self, var: Var) -> &mut Option<u8> {
        match var {
            Var::Letter(c) => &mut self.letters[letter_slot(c)],
            Var::Carry(i) => {
                if i >= self.carries.len() {
                    self.carries.resize(i + 1, None);
                }
                &mut self.carries[i]
            }
        }
    }
}
