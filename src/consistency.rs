//! Consistency checks.
//!
//! [`is_consistent`] is the per-node check run by the search before every
//! tentative assignment. [`audit_solution`] re-verifies a finished assignment
//! from scratch, independently of the search, so that a gap in the model or
//! the search surfaces as an error instead of a wrong answer.

use crate::assignment::Assignment;
use crate::constraints::Constraints;
use crate::model::Model;
use crate::puzzle_char::BASE;
use crate::variable::Var;

/// Can `var` take `value` without breaking the all-different rule or any
/// fully-assigned column?
///
/// Columns with a participant still unassigned are not yet violated; this is
/// a local check, not propagation.
#[must_use]
pub fn is_consistent(var: Var, value: u8, assignment: &Assignment, constraints: &Constraints) -> bool {
    // 1. All-different over letters; carries neither conflict nor get conflicted with.
    if var.is_letter() && assignment.letter_holds(value, var) {
        return false;
    }

    // 2. Every column touching `var` that becomes fully known must add up.
    constraints
        .involving(var)
        .all(|c| c.evaluate_with(var, value, assignment) != Some(false))
}

/// Check a complete assignment against every invariant of `model`.
///
/// # Errors
///
/// Returns a description of the first violation found: an unassigned
/// variable, a digit outside its domain, two letters sharing a digit, a
/// leading zero, or a column whose arithmetic does not hold.
pub fn audit_solution(model: &Model, assignment: &Assignment) -> Result<(), String> {
    let mut owner: [Option<Var>; BASE as usize] = [None; BASE as usize];

    for &var in &model.variables {
        let Some(digit) = assignment.get(var) else {
            return Err(format!("variable {var} is unassigned"));
        };
        if !model.domains.get(var).contains(digit) {
            return Err(format!("{var}={digit} is outside its domain {}", model.domains.get(var)));
        }
        if var.is_letter() {
            if let Some(other) = owner[usize::from(digit)] {
                return Err(format!("letters {other} and {var} both hold {digit}"));
            }
            owner[usize::from(digit)] = Some(var);
        }
    }

    if let Some(var) = model.leading_letters.iter().find(|&&v| assignment.get(v) == Some(0)) {
        return Err(format!("leading letter {var} is 0"));
    }

    for c in &model.constraints {
        match c.evaluate(assignment) {
            Some(true) => {}
            Some(false) => return Err(format!("column does not add up: {c} with {assignment}")),
            None => return Err(format!("column has unassigned participants: {c}")),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelConfig;
    use crate::puzzle::Puzzle;

    fn model(words: &[&str]) -> Model {
        Model::build(&Puzzle::new(words).unwrap(), ModelConfig::default())
    }

    #[test]
    fn test_rejects_digit_held_by_other_letter() {
        let m = model(&["A", "A", "B"]);
        let mut a = m.initial_assignment.clone();
        a.set(Var::letter('A'), 1);
        assert!(!is_consistent(Var::letter('B'), 1, &a, &m.constraints));
    }

    #[test]
    fn test_carry_may_share_digit_with_letter() {
        let m = model(&["TO", "GO", "OUT"]);
        let mut a = m.initial_assignment.clone();
        a.set(Var::letter('O'), 1);
        // C2 = 1 next to O = 1 is fine
        assert!(is_consistent(Var::carry(2), 1, &a, &m.constraints));
        // and a letter may equal an already-assigned carry
        let mut b = m.initial_assignment.clone();
        b.set(Var::carry(1), 1);
        assert!(is_consistent(Var::letter('T'), 1, &b, &m.constraints));
    }

    #[test]
    fn test_two_carries_may_coincide() {
        let m = model(&["SEND", "MORE", "MONEY"]);
        let mut a = m.initial_assignment.clone();
        a.set(Var::carry(1), 1);
        assert!(is_consistent(Var::carry(2), 1, &a, &m.constraints));
    }

    #[test]
    fn test_partial_column_is_not_violated() {
        let m = model(&["A", "A", "B"]);
        let a = m.initial_assignment.clone();
        // B unknown, so A = 7 cannot be refuted yet
        assert!(is_consistent(Var::letter('A'), 7, &a, &m.constraints));
    }

    #[test]
    fn test_complete_column_is_checked() {
        let m = model(&["A", "A", "B"]);
        let mut a = m.initial_assignment.clone();
        a.set(Var::carry(1), 0);
        a.set(Var::letter('A'), 1);
        assert!(!is_consistent(Var::letter('B'), 3, &a, &m.constraints));
        assert!(is_consistent(Var::letter('B'), 2, &a, &m.constraints));
    }

    #[test]
    fn test_zero_values_are_known_values() {
        // C0 = 0 and C1 = 0 are known digits, so column 0 is complete
        let m = model(&["AB", "CD", "EF"]);
        let mut a = m.initial_assignment.clone();
        a.set(Var::letter('B'), 2);
        a.set(Var::letter('D'), 3);
        a.set(Var::carry(1), 0);
        assert!(!is_consistent(Var::letter('F'), 4, &a, &m.constraints));
        assert!(is_consistent(Var::letter('F'), 5, &a, &m.constraints));
    }

    #[test]
    fn test_audit_accepts_send_more_money() {
        let m = model(&["SEND", "MORE", "MONEY"]);
        let mut a = m.initial_assignment.clone();
        for (c, d) in [('O', 0), ('M', 1), ('Y', 2), ('E', 5), ('N', 6), ('D', 7), ('R', 8), ('S', 9)] {
            a.set(Var::letter(c), d);
        }
        for (i, d) in [(1, 1), (2, 1), (3, 0), (4, 1)] {
            a.set(Var::carry(i), d);
        }
        assert_eq!(audit_solution(&m, &a), Ok(()));
    }

    #[test]
    fn test_audit_reports_unassigned() {
        let m = model(&["A", "A", "B"]);
        let err = audit_solution(&m, &m.initial_assignment).unwrap_err();
        assert!(err.contains("unassigned"), "{err}");
    }

    #[test]
    fn test_audit_reports_shared_digit() {
        let m = model(&["A", "B", "C"]);
        let mut a = m.initial_assignment.clone();
        a.set(Var::letter('A'), 2);
        a.set(Var::letter('B'), 2);
        a.set(Var::letter('C'), 4);
        a.set(Var::carry(1), 0);
        let err = audit_solution(&m, &a).unwrap_err();
        assert!(err.contains("both hold 2"), "{err}");
    }

    #[test]
    fn test_audit_reports_bad_column() {
        let m = model(&["A", "B", "C"]);
        let mut a = m.initial_assignment.clone();
        a.set(Var::letter('A'), 1);
        a.set(Var::letter('B'), 2);
        a.set(Var::letter('C'), 4);
        a.set(Var::carry(1), 0);
        let err = audit_solution(&m, &a).unwrap_err();
        assert!(err.contains("does not add up"), "{err}");
    }
}
