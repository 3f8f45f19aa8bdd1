//! Set algebra over unordered sets.
//!
//! Inputs are borrowed and never modified. Each operation returns a fresh
//! mutable set, so results can feed straight into further operations.

use std::collections::HashSet as StdHashSet;
use std::hash::{BuildHasher, Hash};

use crate::hash::HashSet;

pub fn union<T, S>(a: &StdHashSet<T, S>, b: &StdHashSet<T, S>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    a.union(b).cloned().collect()
}

pub fn intersection<T, S>(a: &StdHashSet<T, S>, b: &StdHashSet<T, S>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    a.intersection(b).cloned().collect()
}

/// Elements of `a` that are not in `b`.
pub fn difference<T, S>(a: &StdHashSet<T, S>, b: &StdHashSet<T, S>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    a.difference(b).cloned().collect()
}

pub fn symmetric_difference<T, S>(a: &StdHashSet<T, S>, b: &StdHashSet<T, S>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    a.symmetric_difference(b).cloned().collect()
}
