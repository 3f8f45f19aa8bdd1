//! Factories and transforms producing lists.
//!
//! Functions without a `_mutable` suffix return an [`ImmutableList`]; the
//! `_mutable` twins return a plain `Vec`. Transforms borrow their source and
//! never mutate it, with the single exception of [`sort_case_insensitive`].

use std::cmp::Ordering;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::frozen::{Frozen, ImmutableList, ImmutableMap, ImmutableSet};
use crate::hash::{HashMap, HashMapExt, HashSet};
use crate::mutability::TryAsMutSlice;
use crate::nulls::require_non_null;

/// An immutable list of the given elements. `None` is a legal element when
/// `T` is an `Option`.
pub fn of<T>(elements: impl IntoIterator<Item = T>) -> ImmutableList<T> {
    elements.into_iter().collect()
}

pub fn of_mutable<T>(elements: impl IntoIterator<Item = T>) -> Vec<T> {
    elements.into_iter().collect()
}

/// An immutable list that rejects absent elements.
pub fn of_non_null<T>(elements: impl IntoIterator<Item = Option<T>>) -> Result<ImmutableList<T>> {
    require_non_null(elements).map(Frozen::new)
}

pub fn copy_of<T: Clone>(list: &[T]) -> ImmutableList<T> {
    Frozen::new(list.to_vec())
}

pub fn copy_of_non_null<T: Clone>(list: &[Option<T>]) -> Result<ImmutableList<T>> {
    require_non_null(list.iter().cloned()).map(Frozen::new)
}

pub fn map<'a, T: 'a, U>(
    source: impl IntoIterator<Item = &'a T>,
    f: impl FnMut(&T) -> U,
) -> ImmutableList<U> {
    Frozen::new(map_mutable(source, f))
}

pub fn map_mutable<'a, T: 'a, U>(
    source: impl IntoIterator<Item = &'a T>,
    mut f: impl FnMut(&T) -> U,
) -> Vec<U> {
    source.into_iter().map(|item| f(item)).collect()
}

pub fn filter<'a, T: Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    predicate: impl FnMut(&T) -> bool,
) -> ImmutableList<T> {
    Frozen::new(filter_mutable(source, predicate))
}

pub fn filter_mutable<'a, T: Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> Vec<T> {
    source
        .into_iter()
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// A copy sorted by natural order. The sort is stable.
pub fn sorted<'a, T: Ord + Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
) -> ImmutableList<T> {
    Frozen::new(sorted_mutable(source))
}

pub fn sorted_mutable<'a, T: Ord + Clone + 'a>(source: impl IntoIterator<Item = &'a T>) -> Vec<T> {
    let mut list = source.into_iter().cloned().collect::<Vec<_>>();
    list.sort();
    list
}

pub fn sorted_by<'a, T: Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    compare: impl FnMut(&T, &T) -> Ordering,
) -> ImmutableList<T> {
    Frozen::new(sorted_by_mutable(source, compare))
}

pub fn sorted_by_mutable<'a, T: Clone + 'a>(
    source: impl IntoIterator<Item = &'a T>,
    compare: impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    let mut list = source.into_iter().cloned().collect::<Vec<_>>();
    list.sort_by(compare);
    list
}

pub fn sorted_by_key<'a, T: Clone + 'a, K: Ord>(
    source: impl IntoIterator<Item = &'a T>,
    key: impl FnMut(&T) -> K,
) -> ImmutableList<T> {
    let mut list = source.into_iter().cloned().collect::<Vec<_>>();
    list.sort_by_key(key);
    Frozen::new(list)
}

pub fn reversed<'a, T: Clone + 'a>(source: impl IntoIterator<Item = &'a T>) -> ImmutableList<T> {
    Frozen::new(reversed_mutable(source))
}

pub fn reversed_mutable<'a, T: Clone + 'a>(source: impl IntoIterator<Item = &'a T>) -> Vec<T> {
    let mut list = source.into_iter().cloned().collect::<Vec<_>>();
    list.reverse();
    list
}

/// Map every element and collect the distinct results.
pub fn map_to_set<'a, T: 'a, U: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    f: impl FnMut(&T) -> U,
) -> ImmutableSet<U> {
    Frozen::new(map_to_mutable_set(source, f))
}

pub fn map_to_mutable_set<'a, T: 'a, U: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    mut f: impl FnMut(&T) -> U,
) -> HashSet<U> {
    source.into_iter().map(|item| f(item)).collect()
}

/// Index elements by a derived key.
///
/// Fails with [`Error::DuplicateKey`] at the first element whose key was
/// already produced.
pub fn to_map<'a, T: Clone + 'a, K: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    key: impl FnMut(&T) -> K,
) -> Result<ImmutableMap<K, T>> {
    to_mutable_map(source, key).map(Frozen::new)
}

pub fn to_map_with<'a, T: 'a, K: Eq + Hash, V>(
    source: impl IntoIterator<Item = &'a T>,
    key: impl FnMut(&T) -> K,
    value: impl FnMut(&T) -> V,
) -> Result<ImmutableMap<K, V>> {
    to_mutable_map_with(source, key, value).map(Frozen::new)
}

pub fn to_mutable_map<'a, T: Clone + 'a, K: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    key: impl FnMut(&T) -> K,
) -> Result<HashMap<K, T>> {
    to_mutable_map_with(source, key, T::clone)
}

pub fn to_mutable_map_with<'a, T: 'a, K: Eq + Hash, V>(
    source: impl IntoIterator<Item = &'a T>,
    mut key: impl FnMut(&T) -> K,
    mut value: impl FnMut(&T) -> V,
) -> Result<HashMap<K, V>> {
    let mut map = HashMap::new();
    for (index, item) in source.into_iter().enumerate() {
        let size = map.len();
        map.insert(key(item), value(item));
        if map.len() == size {
            debug!(index, "duplicate key rejected");
            return Err(Error::DuplicateKey { index });
        }
    }
    Ok(map)
}

/// Group elements by a classifier.
///
/// Unlike [`to_map`] repeated keys are expected. A classifier returning an
/// `Option` puts every `None` into one group.
pub fn group_by<'a, T: Clone + 'a, K: Eq + Hash>(
    source: impl IntoIterator<Item = &'a T>,
    classifier: impl FnMut(&T) -> K,
) -> HashMap<K, Vec<T>> {
    group_by_and_map(source, classifier, T::clone)
}

pub fn group_by_and_map<'a, T: 'a, K: Eq + Hash, V>(
    source: impl IntoIterator<Item = &'a T>,
    mut classifier: impl FnMut(&T) -> K,
    mut value_mapper: impl FnMut(&T) -> V,
) -> HashMap<K, Vec<V>> {
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for item in source {
        groups
            .entry(classifier(item))
            .or_default()
            .push(value_mapper(item));
    }
    groups
}

/// Concatenate containers in order.
pub fn flat_map<I: IntoIterator>(
    containers: impl IntoIterator<Item = I>,
) -> ImmutableList<I::Item> {
    containers.into_iter().flatten().collect()
}

/// Concatenate containers that may be absent and may hold absent elements.
///
/// An absent argument or container fails with [`Error::NullArgument`]; an
/// absent element fails with [`Error::NullElement`], indexed by its position
/// in the concatenation.
pub fn try_flat_map<C, I, T>(containers: Option<C>) -> Result<ImmutableList<T>>
where
    C: IntoIterator<Item = Option<I>>,
    I: IntoIterator<Item = Option<T>>,
{
    let containers = containers.ok_or(Error::NullArgument {
        argument: "containers",
    })?;
    let mut list = Vec::new();
    for container in containers {
        let container = container.ok_or(Error::NullArgument {
            argument: "container",
        })?;
        for element in container {
            let index = list.len();
            list.push(element.ok_or(Error::NullElement { index })?);
        }
    }
    Ok(Frozen::new(list))
}

/// Stable in-place sort by a string key, ignoring case.
///
/// Fails with [`Error::UnsupportedMutation`] on an immutable list, which is
/// left untouched.
pub fn sort_case_insensitive<T, L>(list: &mut L, mut key: impl FnMut(&T) -> &str) -> Result<()>
where
    L: TryAsMutSlice<T> + ?Sized,
{
    let slice = list.try_as_mut_slice()?;
    slice.sort_by(|a, b| compare_ignore_case(key(a), key(b)));
    Ok(())
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}

// Upper then lower, so characters whose case forms differ in both
// directions still compare equal. Multi-char mappings are left alone.
fn fold_case(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
