//! Factories producing maps.
//!
//! [`MapBuilder`] collects key/value entries and validates them when a map
//! is built: every key must be present and distinct. Values may be absent
//! (`V = Option<_>`) except in [`MapBuilder::build_ordered_non_null`].

use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::frozen::{Frozen, ImmutableMap, ImmutableOrderedMap};
use crate::hash::{HashMap, HashMapExt, IndexMap, RandomState};

#[derive(Debug, Clone)]
pub struct MapBuilder<K, V> {
    entries: Vec<(Option<K>, V)>,
}

impl<K, V> Default for MapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> MapBuilder<K, V> {
    pub fn new() -> Self {
        MapBuilder {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MapBuilder {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn entry(mut self, key: K, value: V) -> Self {
        self.entries.push((Some(key), value));
        self
    }

    /// Add an entry whose key may be absent. An absent key fails the build
    /// with [`Error::NullKey`].
    pub fn optional_entry(mut self, key: Option<K>, value: V) -> Self {
        self.entries.push((key, value));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> MapBuilder<K, V> {
    pub fn build(self) -> Result<ImmutableMap<K, V>> {
        self.build_mutable().map(Frozen::new)
    }

    pub fn build_mutable(self) -> Result<HashMap<K, V>> {
        let map = HashMap::with_capacity(self.len());
        self.build_into(map)
    }

    /// An immutable map iterating in entry order.
    pub fn build_ordered(self) -> Result<ImmutableOrderedMap<K, V>> {
        self.build_ordered_mutable().map(Frozen::new)
    }

    pub fn build_ordered_mutable(self) -> Result<IndexMap<K, V>> {
        let map = IndexMap::with_capacity_and_hasher(self.len(), RandomState::new());
        self.build_into(map)
    }

    fn build_into<M: EntrySink<K, V>>(self, mut map: M) -> Result<M> {
        for (index, (key, value)) in self.entries.into_iter().enumerate() {
            let key = require_key(key, index)?;
            insert_unique(&mut map, index, key, value)?;
        }
        Ok(map)
    }
}

impl<K: Eq + Hash, V> MapBuilder<K, Option<V>> {
    /// An immutable ordered map that rejects absent values with
    /// [`Error::NullValue`].
    pub fn build_ordered_non_null(self) -> Result<ImmutableOrderedMap<K, V>> {
        let mut map = IndexMap::with_capacity_and_hasher(self.len(), RandomState::new());
        for (index, (key, value)) in self.entries.into_iter().enumerate() {
            let key = require_key(key, index)?;
            let Some(value) = value else {
                debug!(index, "null value rejected");
                return Err(Error::NullValue { index });
            };
            insert_unique(&mut map, index, key, value)?;
        }
        Ok(Frozen::new(map))
    }
}

impl<K, V> FromIterator<(K, V)> for MapBuilder<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = MapBuilder::new();
        builder.extend(iter);
        builder
    }
}

impl<K, V> Extend<(K, V)> for MapBuilder<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (Some(key), value)));
    }
}

trait EntrySink<K, V> {
    /// Insert, returning whether the key was new.
    fn insert_entry(&mut self, key: K, value: V) -> bool;
}

impl<K: Eq + Hash, V> EntrySink<K, V> for HashMap<K, V> {
    fn insert_entry(&mut self, key: K, value: V) -> bool {
        self.insert(key, value).is_none()
    }
}

impl<K: Eq + Hash, V> EntrySink<K, V> for IndexMap<K, V> {
    fn insert_entry(&mut self, key: K, value: V) -> bool {
        self.insert(key, value).is_none()
    }
}

fn require_key<K>(key: Option<K>, index: usize) -> Result<K> {
    key.ok_or_else(|| {
        debug!(index, "null key rejected");
        Error::NullKey { index }
    })
}

fn insert_unique<K, V>(
    map: &mut impl EntrySink<K, V>,
    index: usize,
    key: K,
    value: V,
) -> Result<()> {
    if map.insert_entry(key, value) {
        Ok(())
    } else {
        debug!(index, "duplicate key rejected");
        Err(Error::DuplicateKey { index })
    }
}

pub fn of<K: Eq + Hash, V>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Result<ImmutableMap<K, V>> {
    entries.into_iter().collect::<MapBuilder<_, _>>().build()
}

pub fn of_mutable<K: Eq + Hash, V>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Result<HashMap<K, V>> {
    entries
        .into_iter()
        .collect::<MapBuilder<_, _>>()
        .build_mutable()
}

pub fn of_ordered<K: Eq + Hash, V>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Result<ImmutableOrderedMap<K, V>> {
    entries
        .into_iter()
        .collect::<MapBuilder<_, _>>()
        .build_ordered()
}

pub fn of_ordered_mutable<K: Eq + Hash, V>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Result<IndexMap<K, V>> {
    entries
        .into_iter()
        .collect::<MapBuilder<_, _>>()
        .build_ordered_mutable()
}

pub fn of_ordered_non_null<K: Eq + Hash, V>(
    entries: impl IntoIterator<Item = (K, Option<V>)>,
) -> Result<ImmutableOrderedMap<K, V>> {
    entries
        .into_iter()
        .collect::<MapBuilder<_, _>>()
        .build_ordered_non_null()
}

pub fn copy_of<'a, K, V>(map: impl IntoIterator<Item = (&'a K, &'a V)>) -> ImmutableMap<K, V>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub fn copy_of_ordered<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> ImmutableOrderedMap<K, V>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub fn copy_of_ordered_non_null<'a, K, V>(
    map: impl IntoIterator<Item = (&'a K, &'a Option<V>)>,
) -> Result<ImmutableOrderedMap<K, V>>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter()
        .enumerate()
        .map(|(index, (key, value))| match value {
            Some(value) => Ok((key.clone(), value.clone())),
            None => {
                debug!(index, "null value rejected");
                Err(Error::NullValue { index })
            }
        })
        .collect()
}
