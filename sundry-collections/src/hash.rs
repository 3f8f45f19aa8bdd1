pub use ahash::{HashMap, HashMapExt, HashSet, HashSetExt, RandomState};

// Ordered containers are hashed with ahash too.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;
pub type IndexSet<T> = indexmap::IndexSet<T, RandomState>;
