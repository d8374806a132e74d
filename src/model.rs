//! The CSP model of a puzzle: variables, their initial domains, the column
//! constraints linking them, and the starting assignment.
//!
//! # Columns and carries
//!
//! Words are read least-significant digit first. With `n` the length of the
//! longer addend there are `n` columns and `n + 1` carries `C0..Cn`:
//!
//! ```text
//!   column i:  C<i> + addend1[i] + addend2[i] = sum[i] + 10 * C<i+1>
//! ```
//!
//! `C0` is fixed to 0. The top carry `Cn` must equal whatever the sum holds
//! beyond the addends: {0} when the sum is no longer than the longer addend,
//! {1} when it is exactly one letter longer, and nothing at all when it is
//! longer still (no addition of two `n`-digit numbers has `n + 2` digits).
//!
//! # Column coverage
//!
//! When the addends differ in length, the shorter one runs out of letters
//! before the last column. [`ColumnCoverage::Padded`] (the default) still
//! constrains those columns, treating the missing digit as 0.
//! [`ColumnCoverage::Shared`] only constrains columns where all three words
//! have a letter, leaving the higher columns of the longer addend free.
//! `Shared` is the literal textbook column rule; it can accept answers whose
//! upper columns do not add up, so it is opt-in.

use std::fmt;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::assignment::Assignment;
use crate::constraints::{ColumnConstraint, Constraints};
use crate::domain::{DigitSet, DomainStore};
use crate::puzzle::Puzzle;
use crate::puzzle_char::BASE;
use crate::variable::Var;

/// Which columns receive a [`ColumnConstraint`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnCoverage {
    /// Every column up to the longer addend; missing digits count as 0.
    #[default]
    Padded,
    /// Only columns where both addends and the sum have a letter.
    Shared,
}

impl Display for ColumnCoverage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ColumnCoverage::Padded => write!(f, "padded"),
            ColumnCoverage::Shared => write!(f, "shared"),
        }
    }
}

/// Options for [`Model::build`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelConfig {
    pub coverage: ColumnCoverage,
}

/// A puzzle expressed as a constraint satisfaction problem.
#[derive(Clone, Debug)]
pub struct Model {
    /// Every variable, sorted (letters, then carries)
    pub variables: Vec<Var>,
    pub domains: DomainStore,
    pub constraints: Constraints,
    /// Letters that lead a word and so may never be 0
    pub leading_letters: Vec<Var>,
    /// Pre-assigned variables (just `C0 = 0`)
    pub initial_assignment: Assignment,
}

impl Model {
    /// Derive the model for `puzzle`.
    #[must_use]
    pub fn build(puzzle: &Puzzle, config: ModelConfig) -> Self {
        let mut domains = DomainStore::default();

        // 1. Letters. A letter leading any word never takes 0.
        let mut leading_letters: Vec<Var> = puzzle.words().iter()
            .filter_map(|w| w.chars().next())
            .map(Var::letter)
            .collect();
        leading_letters.sort_unstable();
        leading_letters.dedup();

        let mut letters: Vec<Var> = puzzle.words().iter()
            .flat_map(|w| w.chars())
            .map(Var::letter)
            .collect();
        letters.sort_unstable();
        letters.dedup();

        for &var in &letters {
            let lowest = u8::from(leading_letters.binary_search(&var).is_ok());
            domains.insert(var, DigitSet::of_range(lowest..=BASE - 1));
        }

        // 2. A sum longer than both addends can only lead with the final carry.
        let num_columns = puzzle.num_columns();
        let sum_len = puzzle.sum().len();
        if sum_len > num_columns
            && let Some(leading) = puzzle.sum().chars().next()
        {
            domains.restrict(Var::letter(leading), DigitSet::single(1));
        }

        // 3. Carries C0..Cn; C0 is fixed, Cn absorbs the length difference.
        let mut carries = Vec::with_capacity(num_columns + 1);
        for i in 0..=num_columns {
            let carry = Var::carry(i);
            let domain = if i == 0 {
                DigitSet::single(0)
            } else if i < num_columns {
                DigitSet::of_range(0..=1)
            } else {
                top_carry_domain(sum_len, num_columns)
            };
            domains.insert(carry, domain);
            carries.push(carry);
        }

        // 4. One constraint per column, least-significant first.
        let reversed: Vec<Vec<char>> = puzzle.words().iter()
            .map(|w| w.chars().rev().collect())
            .collect();
        let letter_at = |word: usize, column: usize| reversed[word].get(column).copied().map(Var::letter);

        let mut constraints = Constraints::default();
        for column in 0..num_columns {
            let addend1 = letter_at(0, column);
            let addend2 = letter_at(1, column);
            let sum = letter_at(2, column);

            if config.coverage == ColumnCoverage::Shared
                && (addend1.is_none() || addend2.is_none() || sum.is_none())
            {
                debug!("column {column} left unconstrained (shared coverage)");
                continue;
            }

            constraints.push(ColumnConstraint {
                column,
                carry_in: Var::carry(column),
                addend1,
                addend2,
                sum,
                carry_out: Var::carry(column + 1),
            });
        }

        let mut initial_assignment = Assignment::default();
        initial_assignment.set(Var::carry(0), 0);

        let mut variables = letters;
        variables.extend(carries);
        debug_assert!(variables.windows(2).all(|w| w[0] < w[1]), "variables must be sorted and unique");

        let model = Model { variables, domains, constraints, leading_letters, initial_assignment };
        debug!("model for {puzzle} ({} coverage):\n{model}", config.coverage);
        model
    }

    /// Letter variables only, in order.
    pub fn letters(&self) -> impl Iterator<Item = Var> + '_ {
        self.variables.iter().copied().filter(Var::is_letter)
    }

    /// The carry out of the most significant column.
    #[must_use]
    pub fn top_carry(&self) -> Var {
        self.variables.iter().copied().filter(Var::is_carry).max().unwrap_or(Var::carry(0))
    }
}

fn top_carry_domain(sum_len: usize, num_columns: usize) -> DigitSet {
    match sum_len.cmp(&num_columns) {
        std::cmp::Ordering::Less | std::cmp::Ordering::Equal => DigitSet::single(0),
        std::cmp::Ordering::Greater if sum_len == num_columns + 1 => DigitSet::single(1),
        std::cmp::Ordering::Greater => DigitSet::empty(),
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "domains:")?;
        writeln!(f, "{}", self.domains)?;
        writeln!(f, "constraints:")?;
        write!(f, "{}", self.constraints)
    }
}
