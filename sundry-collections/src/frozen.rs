//! Immutable snapshots of collections.
//!
//! A [`Frozen`] value owns its collection behind an [`Arc`] and only ever
//! hands out shared references to it, so the compiler rejects any attempt
//! to mutate it in place. Cloning a snapshot is cheap and never copies the
//! elements. Because the backing collection is owned, a snapshot never
//! aliases storage the caller can still mutate.
//!
//! Snapshots can be shared across threads when the collection can.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::hash::{HashMap, HashSet, IndexMap, IndexSet};

/// An immutable list.
pub type ImmutableList<T> = Frozen<Vec<T>>;
/// An immutable, unordered set.
pub type ImmutableSet<T> = Frozen<HashSet<T>>;
/// An immutable set iterating in insertion order.
pub type ImmutableOrderedSet<T> = Frozen<IndexSet<T>>;
/// An immutable, unordered map.
pub type ImmutableMap<K, V> = Frozen<HashMap<K, V>>;
/// An immutable map iterating in insertion order.
pub type ImmutableOrderedMap<K, V> = Frozen<IndexMap<K, V>>;

#[derive(PartialEq, Eq, Hash)]
pub struct Frozen<C> {
    inner: Arc<C>,
}

impl<C> Frozen<C> {
    pub fn new(inner: C) -> Self {
        Frozen {
            inner: Arc::new(inner),
        }
    }

    /// A mutable copy of the frozen collection.
    pub fn thaw(&self) -> C
    where
        C: Clone,
    {
        C::clone(&self.inner)
    }

    /// Take the collection out, copying it only if the snapshot is shared.
    pub fn into_inner(self) -> C
    where
        C: Clone,
    {
        Arc::unwrap_or_clone(self.inner)
    }
}

impl<C> Clone for Frozen<C> {
    fn clone(&self) -> Self {
        Frozen {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> Deref for Frozen<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        &self.inner
    }
}

impl<C> AsRef<C> for Frozen<C> {
    #[inline]
    fn as_ref(&self) -> &C {
        &self.inner
    }
}

impl<C> From<C> for Frozen<C> {
    fn from(inner: C) -> Self {
        Frozen::new(inner)
    }
}

impl<C: Default> Default for Frozen<C> {
    fn default() -> Self {
        Frozen::new(C::default())
    }
}

impl<C: fmt::Debug> fmt::Debug for Frozen<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<C, T> FromIterator<T> for Frozen<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Frozen::new(iter.into_iter().collect())
    }
}

impl<'a, C> IntoIterator for &'a Frozen<C>
where
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;
    type IntoIter = <&'a C as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.as_ref().into_iter()
    }
}

#[cfg(feature = "serde")]
impl<C: serde::Serialize> serde::Serialize for Frozen<C> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
