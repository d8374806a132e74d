// constraints.rs
use std::fmt;
use std::fmt::Display;

use crate::assignment::Assignment;
use crate::puzzle_char::BASE;
use crate::variable::Var;

/// The arithmetic of one column of the addition:
/// `carry_in + addend1 + addend2 == sum + 10 * carry_out`.
///
/// A word that has run out of digits at this column is represented by `None`
/// and contributes a constant 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConstraint {
    /// 0-based column index, least-significant digit first
    pub column: usize,
    pub carry_in: Var,
    pub addend1: Option<Var>,
    pub addend2: Option<Var>,
    pub sum: Option<Var>,
    pub carry_out: Var,
}

/// The value a participant takes while checking one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effective {
    Known(u8),
    Unknown,
}

impl ColumnConstraint {
    /// The five slots in `(carry_in, addend1, addend2, sum, carry_out)` order.
    fn slots(&self) -> [Option<Var>; 5] {
        [Some(self.carry_in), self.addend1, self.addend2, self.sum, Some(self.carry_out)]
    }

    /// Variables taking part in this column (absent slots skipped, repeats kept).
    pub fn participants(&self) -> impl Iterator<Item = Var> {
        self.slots().into_iter().flatten()
    }

    /// Does `var` appear anywhere in this column?
    #[must_use]
    pub fn involves(&self, var: Var) -> bool {
        self.participants().any(|p| p == var)
    }

    /// Does the column identity hold for the given slot values?
    #[must_use]
    pub fn holds_for(carry_in: u8, addend1: u8, addend2: u8, sum: u8, carry_out: u8) -> bool {
        u32::from(carry_in) + u32::from(addend1) + u32::from(addend2)
            == u32::from(sum) + u32::from(BASE) * u32::from(carry_out)
    }

    /// Evaluate this column as if `var` held `value`, reading everything else
    /// from `assignment`.
    ///
    /// Returns `None` while any participant is still unassigned, otherwise
    /// whether the identity holds.
    #[must_use]
    pub fn evaluate_with(&self, var: Var, value: u8, assignment: &Assignment) -> Option<bool> {
        self.evaluate_inner(Some((var, value)), assignment)
    }

    /// Evaluate this column against `assignment` alone.
    #[must_use]
    pub fn evaluate(&self, assignment: &Assignment) -> Option<bool> {
        self.evaluate_inner(None, assignment)
    }

    fn evaluate_inner(&self, candidate: Option<(Var, u8)>, assignment: &Assignment) -> Option<bool> {
        let effective = |slot: Option<Var>| match (slot, candidate) {
            (None, _) => Effective::Known(0),
            (Some(p), Some((var, value))) if p == var => Effective::Known(value),
            (Some(p), _) => assignment.get(p).map_or(Effective::Unknown, Effective::Known),
        };

        let mut known = [0u8; 5];
        for (dst, slot) in known.iter_mut().zip(self.slots()) {
            match effective(slot) {
                Effective::Known(d) => *dst = d,
                Effective::Unknown => return None,
            }
        }
        let [carry_in, addend1, addend2, sum, carry_out] = known;
        Some(Self::holds_for(carry_in, addend1, addend2, sum, carry_out))
    }
}

/// `C1 + S + M = O + 10*C2` style; absent slots print as `0`
impl Display for ColumnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |slot: Option<Var>| slot.map_or_else(|| "0".to_string(), |v| v.to_string());
        write!(
            f,
            "col {}: {} + {} + {} = {} + 10*{}",
            self.column,
            self.carry_in,
            show(self.addend1),
            show(self.addend2),
            show(self.sum),
            self.carry_out
        )
    }
}

/// The ordered list of column constraints of a model, least-significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    inner: Vec<ColumnConstraint>,
}

impl Constraints {
    pub(crate) fn push(&mut self, constraint: ColumnConstraint) {
        self.inner.push(constraint);
    }

    /// Constraints in which `var` appears.
    pub fn involving(&self, var: Var) -> impl Iterator<Item = &ColumnConstraint> {
        self.inner.iter().filter(move |c| c.involves(var))
    }

    /// Degree of `var`: the number of constraints it appears in. A variable
    /// appearing twice in one column (`A + A = B`) counts once for it.
    #[must_use]
    pub fn degree(&self, var: Var) -> usize {
        self.involving(var).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnConstraint> {
        self.inner.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a> IntoIterator for &'a Constraints {
    type Item = &'a ColumnConstraint;
    type IntoIter = std::slice::Iter<'a, ColumnConstraint>;
    fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.iter().enumerate() {
            if i > 0 { writeln!(f)?; }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a_plus_a_is_b() -> ColumnConstraint {
        ColumnConstraint {
            column: 0,
            carry_in: Var::carry(0),
            addend1: Some(Var::letter('A')),
            addend2: Some(Var::letter('A')),
            sum: Some(Var::letter('B')),
            carry_out: Var::carry(1),
        }
    }

    #[test]
    fn test_holds_for() {
        assert!(ColumnConstraint::holds_for(0, 7, 5, 2, 1));
        assert!(ColumnConstraint::holds_for(1, 9, 9, 9, 1));
        assert!(!ColumnConstraint::holds_for(0, 7, 5, 2, 0));
    }

    #[test]
    fn test_evaluate_with_unknown_participant() {
        let c = a_plus_a_is_b();
        let mut a = Assignment::default();
        a.set(Var::carry(0), 0);
        // B and C1 unknown
        assert_eq!(c.evaluate_with(Var::letter('A'), 3, &a), None);
    }

    #[test]
    fn test_evaluate_with_repeated_participant() {
        let c = a_plus_a_is_b();
        let mut a = Assignment::default();
        a.set(Var::carry(0), 0);
        a.set(Var::carry(1), 0);
        a.set(Var::letter('B'), 6);
        assert_eq!(c.evaluate_with(Var::letter('A'), 3, &a), Some(true));
        assert_eq!(c.evaluate_with(Var::letter('A'), 4, &a), Some(false));
    }

    #[test]
    fn test_candidate_value_overrides_assignment() {
        let c = a_plus_a_is_b();
        let mut a = Assignment::default();
        a.set(Var::carry(0), 0);
        a.set(Var::carry(1), 0);
        a.set(Var::letter('A'), 1);
        assert_eq!(c.evaluate_with(Var::letter('B'), 2, &a), Some(true));
        assert_eq!(c.evaluate_with(Var::letter('B'), 3, &a), Some(false));
    }

    #[test]
    fn test_absent_slot_is_zero() {
        // carry-in + X + (nothing) = Y + 10 * carry-out
        let c = ColumnConstraint {
            column: 1,
            carry_in: Var::carry(1),
            addend1: Some(Var::letter('X')),
            addend2: None,
            sum: Some(Var::letter('Y')),
            carry_out: Var::carry(2),
        };
        let mut a = Assignment::default();
        a.set(Var::carry(1), 1);
        a.set(Var::carry(2), 0);
        a.set(Var::letter('X'), 4);
        assert_eq!(c.evaluate_with(Var::letter('Y'), 5, &a), Some(true));
        assert_eq!(c.evaluate(&a), None);
        a.set(Var::letter('Y'), 5);
        assert_eq!(c.evaluate(&a), Some(true));
    }

    #[test]
    fn test_degree_counts_once_per_constraint() {
        let mut cs = Constraints::default();
        cs.push(a_plus_a_is_b());
        assert_eq!(cs.degree(Var::letter('A')), 1);
        assert_eq!(cs.degree(Var::letter('B')), 1);
        assert_eq!(cs.degree(Var::carry(1)), 1);
        assert_eq!(cs.degree(Var::letter('Q')), 0);
    }

    #[test]
    fn test_display() {
        let c = ColumnConstraint { addend2: None, ..a_plus_a_is_b() };
        assert_eq!(c.to_string(), "col 0: C0 + A + 0 = B + 10*C1");
    }
}
