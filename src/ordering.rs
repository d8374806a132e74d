//! Variable and value ordering for the backtracking search.
//!
//! Both orderings are deterministic: identical models always yield identical
//! choices, so repeated runs find the same solution.

use std::cmp::Reverse;

use crate::assignment::Assignment;
use crate::constraints::Constraints;
use crate::domain::{DigitIter, DomainStore};
use crate::variable::Var;

/// Pick the next variable to branch on, or `None` once everything is assigned.
///
/// Ranking, first difference wins:
/// 1. fewest digits left in the domain (minimum remaining values);
/// 2. most constraints involving the variable (degree);
/// 3. the variable order itself (letters alphabetically, then carries).
#[must_use]
pub fn select_unassigned_variable(
    variables: &[Var],
    assignment: &Assignment,
    domains: &DomainStore,
    constraints: &Constraints,
) -> Option<Var> {
    variables
        .iter()
        .copied()
        .filter(|&var| !assignment.is_assigned(var))
        .min_by_key(|&var| (domains.size(var), Reverse(constraints.degree(var)), var))
}

/// The digits to try for `var`, smallest first.
///
/// No least-constraining-value reordering is done. The returned iterator is a
/// fresh copy each call, so a caller can always restart from the beginning.
#[must_use]
pub fn order_domain_values(var: Var, domains: &DomainStore) -> DigitIter {
    domains.get(var).iter()
}
