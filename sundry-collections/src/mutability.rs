use std::hash::{BuildHasher, Hash};

use crate::error::{Error, Result};
use crate::frozen::Frozen;

/// Insertion that may be refused.
///
/// Mutable collections accept every insertion; [`Frozen`] snapshots refuse
/// all of them with [`Error::UnsupportedMutation`]. For sets and maps a
/// repeated element or key is not an error here: the set keeps its element
/// and the map replaces its value, as the underlying collection does.
pub trait TryInsert<T> {
    fn try_insert(&mut self, value: T) -> Result<()>;
}

impl<T> TryInsert<T> for Vec<T> {
    fn try_insert(&mut self, value: T) -> Result<()> {
        self.push(value);
        Ok(())
    }
}

impl<T, S> TryInsert<T> for std::collections::HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn try_insert(&mut self, value: T) -> Result<()> {
        self.insert(value);
        Ok(())
    }
}

impl<T, S> TryInsert<T> for indexmap::IndexSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn try_insert(&mut self, value: T) -> Result<()> {
        self.insert(value);
        Ok(())
    }
}

impl<K, V, S> TryInsert<(K, V)> for std::collections::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn try_insert(&mut self, (key, value): (K, V)) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

impl<K, V, S> TryInsert<(K, V)> for indexmap::IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn try_insert(&mut self, (key, value): (K, V)) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

impl<C, T> TryInsert<T> for Frozen<C> {
    fn try_insert(&mut self, _value: T) -> Result<()> {
        Err(Error::UnsupportedMutation)
    }
}

/// Mutable access to the elements of a list, for in-place reordering.
pub trait TryAsMutSlice<T> {
    fn try_as_mut_slice(&mut self) -> Result<&mut [T]>;
}

impl<T> TryAsMutSlice<T> for [T] {
    fn try_as_mut_slice(&mut self) -> Result<&mut [T]> {
        Ok(self)
    }
}

impl<T> TryAsMutSlice<T> for Vec<T> {
    fn try_as_mut_slice(&mut self) -> Result<&mut [T]> {
        Ok(self.as_mut_slice())
    }
}

impl<T> TryAsMutSlice<T> for Frozen<Vec<T>> {
    fn try_as_mut_slice(&mut self) -> Result<&mut [T]> {
        Err(Error::UnsupportedMutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frozen::{ImmutableList, ImmutableSet};
    use crate::hash::{HashSet, HashSetExt};

    #[test]
    fn test_mutable_accepts_insert() {
        let mut list = vec![1];
        list.try_insert(2).unwrap();
        assert_eq!(list, vec![1, 2]);

        let mut set = HashSet::<i32>::new();
        set.try_insert(1).unwrap();
        set.try_insert(1).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_frozen_refuses_insert() {
        let mut list: ImmutableList<i32> = Frozen::new(vec![1]);
        assert_eq!(list.try_insert(2), Err(Error::UnsupportedMutation));
        assert_eq!(*list, vec![1]);

        let mut set: ImmutableSet<i32> = [1].into_iter().collect();
        assert_eq!(set.try_insert(2), Err(Error::UnsupportedMutation));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_frozen_refuses_mut_slice() {
        let mut list: ImmutableList<i32> = Frozen::new(vec![2, 1]);
        assert_eq!(list.try_as_mut_slice(), Err(Error::UnsupportedMutation));
    }
}
