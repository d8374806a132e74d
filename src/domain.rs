//! Per-variable digit domains.
//!
//! A domain is stored as a bit set over the digits `0..=9`, so iteration is
//! always ascending and set operations are cheap. The [`DomainStore`] keeps one
//! domain per variable in a `BTreeMap`, giving a deterministic iteration order.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use crate::puzzle_char::BASE;
use crate::variable::Var;

/// A set of digits, one bit per digit (bit `d` set means `d` is possible).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    const FULL_MASK: u16 = (1 << BASE) - 1;

    #[must_use]
    pub const fn empty() -> Self {
        DigitSet(0)
    }

    #[must_use]
    pub fn single(digit: u8) -> Self {
        Self::empty().with(digit)
    }

    /// All digits in `range` (clamped to the valid digits).
    #[must_use]
    pub fn of_range(range: RangeInclusive<u8>) -> Self {
        range.filter(|&d| d < BASE).fold(Self::empty(), DigitSet::with)
    }

    #[must_use]
    pub fn with(self, digit: u8) -> Self {
        debug_assert!(digit < BASE, "digit {digit} out of range");
        DigitSet((self.0 | (1 << digit)) & Self::FULL_MASK)
    }

    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        digit < BASE && self.0 & (1 << digit) != 0
    }

    #[must_use]
    pub fn intersect(self, other: DigitSet) -> Self {
        DigitSet(self.0 & other.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Digits in ascending order.
    pub fn iter(&self) -> DigitIter {
        DigitIter { bits: self.0 }
    }
}

/// Ascending iterator over a [`DigitSet`].
#[derive(Clone, Debug)]
pub struct DigitIter {
    bits: u16,
}

impl Iterator for DigitIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        // trailing_zeros of a nonzero u16 is at most 15, fits in u8
        let digit = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DigitIter {}

impl<'a> IntoIterator for &'a DigitSet {
    type Item = u8;
    type IntoIter = DigitIter;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), DigitSet::with)
    }
}

/// `{0,1,2}`, or `{}` when empty
impl Display for DigitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        write!(f, "{{{}}}", digits.join(","))
    }
}

/// Domains for every variable of a model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainStore {
    inner: BTreeMap<Var, DigitSet>,
}

impl DomainStore {
    /// Set (or replace) the domain for `var`.
    pub(crate) fn insert(&mut self, var: Var, domain: DigitSet) {
        self.inner.insert(var, domain);
    }

    /// Intersect the existing domain of `var` with `restriction`.
    /// A variable without a domain yet is left untouched.
    pub(crate) fn restrict(&mut self, var: Var, restriction: DigitSet) {
        if let Some(domain) = self.inner.get_mut(&var) {
            *domain = domain.intersect(restriction);
        }
    }

    /// The domain for `var`; unknown variables have an empty domain.
    #[must_use]
    pub fn get(&self, var: Var) -> DigitSet {
        self.inner.get(&var).copied().unwrap_or_default()
    }

    /// Number of digits still possible for `var`.
    #[must_use]
    pub fn size(&self, var: Var) -> usize {
        self.get(var).len()
    }

    #[must_use]
    pub fn contains_var(&self, var: Var) -> bool {
        self.inner.contains_key(&var)
    }

    /// Iterate `(variable, domain)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, DigitSet)> + '_ {
        self.inner.iter().map(|(&var, &domain)| (var, domain))
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

/// One `var: {digits}` line per variable, in variable order.
impl Display for DomainStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (var, domain)) in self.iter().enumerate() {
            if i > 0 { writeln!(f)?; }
            write!(f, "{var}: {domain}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_set_range_and_len() {
        let all = DigitSet::of_range(0..=9);
        assert_eq!(all.len(), 10);
        let nonzero = DigitSet::of_range(1..=9);
        assert_eq!(nonzero.len(), 9);
        assert!(!nonzero.contains(0));
        assert!(nonzero.contains(9));
    }

    #[test]
    fn test_digit_set_range_is_clamped() {
        assert_eq!(DigitSet::of_range(8..=15).iter().collect::<Vec<_>>(), vec![8, 9]);
        assert!(!DigitSet::of_range(0..=9).contains(10));
    }

    #[test]
    fn test_digit_set_iterates_ascending() {
        let set: DigitSet = [7, 2, 9, 0].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 7, 9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_digit_set_iter_is_restartable() {
        let set = DigitSet::of_range(3..=5);
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = set.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_digit_set_intersect() {
        let a = DigitSet::of_range(1..=9);
        assert_eq!(a.intersect(DigitSet::single(1)), DigitSet::single(1));
        assert!(a.intersect(DigitSet::single(0)).is_empty());
    }

    #[test]
    fn test_digit_set_display() {
        assert_eq!(DigitSet::of_range(0..=2).to_string(), "{0,1,2}");
        assert_eq!(DigitSet::empty().to_string(), "{}");
    }

    #[test]
    fn test_store_restrict() {
        let mut store = DomainStore::default();
        store.insert(Var::letter('M'), DigitSet::of_range(1..=9));
        store.restrict(Var::letter('M'), DigitSet::single(1));
        assert_eq!(store.get(Var::letter('M')), DigitSet::single(1));

        // restricting an unknown variable does not create it
        store.restrict(Var::letter('Q'), DigitSet::single(1));
        assert!(!store.contains_var(Var::letter('Q')));
        assert_eq!(store.size(Var::letter('Q')), 0);
    }

    #[test]
    fn test_store_iterates_in_var_order() {
        let mut store = DomainStore::default();
        store.insert(Var::carry(1), DigitSet::of_range(0..=1));
        store.insert(Var::letter('B'), DigitSet::of_range(0..=9));
        store.insert(Var::letter('A'), DigitSet::of_range(0..=9));
        let vars: Vec<_> = store.iter().map(|(v, _)| v).collect();
        assert_eq!(vars, vec![Var::letter('A'), Var::letter('B'), Var::carry(1)]);
        assert_eq!(store.to_string(), "A: {0,1,2,3,4,5,6,7,8,9}\nB: {0,1,2,3,4,5,6,7,8,9}\nC1: {0,1}");
    }
}
