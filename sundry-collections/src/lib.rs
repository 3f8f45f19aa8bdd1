//! Collection factories and transforms.
//!
//! Results come in mutable and immutable flavours. Immutable results are
//! [`Frozen`] snapshots; mutable results are ordinary `Vec`, [`HashSet`],
//! [`HashMap`] values, or their insertion-ordered [`IndexSet`] and
//! [`IndexMap`] counterparts.
//!
//! [`HashSet`]: hash::HashSet
//! [`HashMap`]: hash::HashMap
//! [`IndexSet`]: hash::IndexSet
//! [`IndexMap`]: hash::IndexMap

mod algebra;
mod error;
mod flatten;
mod frozen;
pub mod hash;
pub mod list;
pub mod map;
mod mutability;
mod nulls;
mod partition;
pub mod set;

pub use algebra::{difference, intersection, symmetric_difference, union};
pub use error::{Error, Result};
pub use flatten::{flatten, FlattenInput, Scalar};
pub use frozen::{
    Frozen, ImmutableList, ImmutableMap, ImmutableOrderedMap, ImmutableOrderedSet, ImmutableSet,
};
pub use map::MapBuilder;
pub use mutability::{TryAsMutSlice, TryInsert};
pub use partition::{partition_by_size, partition_clamp, partition_into, Partitions};
