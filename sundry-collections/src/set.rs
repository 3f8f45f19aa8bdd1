//! Factories and transforms producing sets.
//!
//! The `of*` factories treat their arguments as a literal: repeated
//! arguments are an error. The `copy_of*` factories take an existing
//! collection and drop repeats silently.

use std::cmp::Ordering;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::frozen::{Frozen, ImmutableList, ImmutableOrderedSet, ImmutableSet};
use crate::hash::{HashMap, HashMapExt, HashSet, IndexSet};

pub use crate::list::{to_map, to_map_with, to_mutable_map, to_mutable_map_with};

pub fn of<T: Eq + Hash>(elements: impl IntoIterator<Item = T>) -> Result<ImmutableSet<T>> {
    of_mutable(elements).map(Frozen::new)
}

pub fn of_mutable<T: Eq + Hash>(elements: impl IntoIterator<Item = T>) -> Result<HashSet<T>> {
    collect_unique(elements, HashSet::len)
}

/// An immutable set iterating in argument order.
pub fn of_ordered<T: Eq + Hash>(
    elements: impl IntoIterator<Item = T>,
) -> Result<ImmutableOrderedSet<T>> {
    of_ordered_mutable(elements).map(Frozen::new)
}

pub fn of_ordered_mutable<T: Eq + Hash>(
    elements: impl IntoIterator<Item = T>,
) -> Result<IndexSet<T>> {
    collect_unique(elements, IndexSet::len)
}

/// Like [`of_ordered`], rejecting absent elements.
///
/// Elements are checked one at a time, so the first absent or repeated
/// element is the one reported.
pub fn of_ordered_non_null<T: Eq + Hash>(
    elements: impl IntoIterator<Item = Option<T>>,
) -> Result<ImmutableOrderedSet<T>> {
    let mut set = IndexSet::default();
    for (index, element) in elements.into_iter().enumerate() {
        let Some(element) = element else {
            debug!(index, "null element rejected");
            return Err(Error::NullElement { index });
        };
        if !set.insert(element) {
            debug!(index, "duplicate element rejected");
            return Err(Error::DuplicateElement {
                expected: index + 1,
                actual: set.len(),
            });
        }
    }
    Ok(Frozen::new(set))
}

fn collect_unique<T, C>(elements: impl IntoIterator<Item = T>, len: fn(&C) -> usize) -> Result<C>
where
    C: FromIterator<T>,
{
    let mut expected = 0;
    let set = elements
        .into_iter()
        .inspect(|_| expected += 1)
        .collect::<C>();
    let actual = len(&set);
    if actual != expected {
        debug!(expected, actual, "duplicate elements rejected");
        return Err(Error::DuplicateElement { expected, actual });
    }
    Ok(set)
}

pub fn copy_of<'a, T: Eq + Hash + Clone + 'a>(
    collection: impl IntoIterator<Item = &'a T>,
) -> ImmutableSet<T> {
    collection.into_iter().cloned().collect()
}

pub fn copy_of_ordered<'a, T: Eq + Hash + Clone + 'a>(
    collection: impl IntoIterator<Item = &'a T>,
) -> ImmutableOrderedSet<T> {
    collection.into_iter().cloned().collect()
}

pub fn copy_of_ordered_non_null<'a, T: Eq + Hash + Clone + 'a>(
    collection: impl IntoIterator<Item = &'a Option<T>>,
) -> Result<ImmutableOrderedSet<T>> {
    collection
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            element.clone().ok_or_else(|| {
                debug!(index, "null element rejected");
                Error::NullElement { index }
            })
        })
        .collect()
}

pub fn map<'a, T: 'a, U: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    f: impl FnMut(&T) -> U,
) -> ImmutableSet<U> {
    Frozen::new(map_mutable(source, f))
}

pub fn map_mutable<'a, T: 'a, U: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    mut f: impl FnMut(&T) -> U,
) -> HashSet<U> {
    source.into_iter().map(|item| f(item)).collect()
}

pub fn filter<'a, T: Eq + Hash + Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    predicate: impl FnMut(&T) -> bool,
) -> ImmutableSet<T> {
    Frozen::new(filter_mutable(source, predicate))
}

pub fn filter_mutable<'a, T: Eq + Hash + Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> HashSet<T> {
    source
        .into_iter()
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// The distinct elements in natural order.
pub fn sorted<'a, T: Ord + Hash + Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
) -> ImmutableOrderedSet<T> {
    Frozen::new(sorted_mutable(source))
}

pub fn sorted_mutable<'a, T: Ord + Hash + Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
) -> IndexSet<T> {
    sorted_by_mutable(source, T::cmp)
}

pub fn sorted_by<'a, T: Eq + Hash + Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    compare: impl FnMut(&T, &T) -> Ordering,
) -> ImmutableOrderedSet<T> {
    Frozen::new(sorted_by_mutable(source, compare))
}

pub fn sorted_by_mutable<'a, T: Eq + Hash + Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    compare: impl FnMut(&T, &T) -> Ordering,
) -> IndexSet<T> {
    let mut elements = source.into_iter().cloned().collect::<Vec<_>>();
    elements.sort_by(compare);
    elements.into_iter().collect()
}

pub fn map_to_list<'a, T: 'a, U>(
    source: impl IntoIterator<Item = &'a T>,
    f: impl FnMut(&T) -> U,
) -> ImmutableList<U> {
    Frozen::new(map_to_mutable_list(source, f))
}

pub fn map_to_mutable_list<'a, T: 'a, U>(
    source: impl IntoIterator<Item = &'a T>,
    mut f: impl FnMut(&T) -> U,
) -> Vec<U> {
    source.into_iter().map(|item| f(item)).collect()
}

/// Group elements by a classifier into sets. `None` keys are allowed.
pub fn group_by<'a, T: Eq + Hash + Clone + 'a, K: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    classifier: impl FnMut(&T) -> K,
) -> HashMap<K, HashSet<T>> {
    group_by_and_map(source, classifier, T::clone)
}

pub fn group_by_and_map<'a, T: 'a, K: Eq + Hash, V: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    mut classifier: impl FnMut(&T) -> K,
    mut value_mapper: impl FnMut(&T) -> V,
) -> HashMap<K, HashSet<V>> {
    let mut groups: HashMap<K, HashSet<V>> = HashMap::new();
    for item in source {
        groups
            .entry(classifier(item))
            .or_default()
            .insert(value_mapper(item));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutability::TryInsert;

    #[test]
    fn test_of() {
        let set = of([1, 2, 3]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(
            of([1, 2, 1]),
            Err(Error::DuplicateElement {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_of_nullable() {
        let set = of([Some("a"), None]).unwrap();
        assert!(set.contains(&None));
        assert_eq!(
            of_ordered([None::<&str>, None]),
            Err(Error::DuplicateElement {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_of_mutable_accepts_insert() {
        let mut set = of_mutable([1]).unwrap();
        set.try_insert(2).unwrap();
        assert_eq!(set.len(), 2);
        let mut set = of([1]).unwrap();
        assert_eq!(set.try_insert(2), Err(Error::UnsupportedMutation));
    }

    #[test]
    fn test_of_ordered_keeps_order() {
        let set = of_ordered(["c", "a", "b"]).unwrap();
        let elements = set.iter().copied().collect::<Vec<_>>();
        assert_eq!(elements, vec!["c", "a", "b"]);
        let mut set = of_ordered_mutable(["c", "a"]).unwrap();
        set.insert("b");
        let elements = set.iter().copied().collect::<Vec<_>>();
        assert_eq!(elements, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_of_ordered_non_null() {
        let set = of_ordered_non_null([Some(2), Some(1)]).unwrap();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(
            of_ordered_non_null([Some(2), None, Some(2)]),
            Err(Error::NullElement { index: 1 })
        );
        assert_eq!(
            of_ordered_non_null([Some(2), Some(3), Some(2), None]),
            Err(Error::DuplicateElement {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_copy_of_dedupes() {
        let source = vec![3, 1, 3, 2, 1];
        assert_eq!(copy_of(&source).len(), 3);
        let ordered = copy_of_ordered(&source);
        assert_eq!(ordered.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_copy_of_ordered_non_null() {
        let source = vec![Some(1), Some(1), Some(2)];
        assert_eq!(copy_of_ordered_non_null(&source).unwrap().len(), 2);
        let source = vec![Some(1), None];
        assert_eq!(
            copy_of_ordered_non_null(&source),
            Err(Error::NullElement { index: 1 })
        );
    }

    #[test]
    fn test_map_and_filter() {
        let source = of([1, 2, 3, 4]).unwrap();
        let parity = map(&source, |x| x % 2);
        assert_eq!(parity.len(), 2);
        let even = filter_mutable(&source, |x| x % 2 == 0);
        assert_eq!(even.len(), 2);
        assert!(even.contains(&2) && even.contains(&4));
    }

    #[test]
    fn test_sorted() {
        let source = vec![3, 1, 2, 1];
        let set = sorted(&source);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        let set = sorted_by_mutable(&source, |a, b| b.cmp(a));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_map_to_list_keeps_repeats() {
        let source = of(["a", "bb", "cc"]).unwrap();
        let mut lengths = map_to_mutable_list(&source, |s| s.len());
        lengths.sort();
        assert_eq!(lengths, vec![1, 2, 2]);
    }

    #[test]
    fn test_group_by() {
        let words = vec!["a", "bb", "cc", "bb"];
        let groups = group_by(&words, |w| w.len());
        assert_eq!(groups[&1].len(), 1);
        assert_eq!(groups[&2].len(), 2);
    }

    #[test]
    fn test_group_by_null_key() {
        let words = vec!["a", "", "b", ""];
        let groups = group_by_and_map(&words, |w| w.chars().next(), |w| w.len());
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&None].len(), 1);
    }
}
