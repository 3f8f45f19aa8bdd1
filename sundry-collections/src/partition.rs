//! Splitting a sequence into contiguous partitions.
//!
//! Every partition, and the list holding them, is an immutable copy: the
//! caller may change the source afterwards without affecting the result.
//! Concatenating the partitions in order always reproduces the source.

use tracing::trace;

use crate::error::{Error, Result};
use crate::frozen::{Frozen, ImmutableList};
use crate::list::copy_of;

pub type Partitions<T> = ImmutableList<ImmutableList<T>>;

/// Consecutive partitions of exactly `max_partition_size` elements, except
/// the last which holds the remainder.
///
/// A sequence no longer than `max_partition_size` (the empty one included)
/// gives a single partition.
pub fn partition_by_size<T: Clone>(
    sequence: &[T],
    max_partition_size: usize,
) -> Result<Partitions<T>> {
    require_positive(max_partition_size, "max_partition_size")?;
    if sequence.len() <= max_partition_size {
        trace!(max_partition_size, "single partition");
        return Ok(Frozen::new(vec![copy_of(sequence)]));
    }
    Ok(sequence.chunks(max_partition_size).map(copy_of).collect())
}

/// Split into `number_of_partitions` partitions of near equal size.
///
/// When the sequence has fewer elements than partitions requested, every
/// element gets its own partition and empty partitions pad the result to
/// exactly `number_of_partitions`. Otherwise the partition size is
/// `ceil(len / number_of_partitions)`, which can yield fewer partitions
/// than requested (10 elements into 4 gives sizes 3, 3, 3, 1 but 9 into 4
/// gives 3, 3, 3).
pub fn partition_into<T: Clone>(
    sequence: &[T],
    number_of_partitions: usize,
) -> Result<Partitions<T>> {
    require_positive(number_of_partitions, "number_of_partitions")?;
    let len = sequence.len();
    if len < number_of_partitions {
        trace!(len, number_of_partitions, "padding with empty partitions");
        let mut partitions = Vec::with_capacity(number_of_partitions);
        for element in sequence {
            partitions.push(Frozen::new(vec![element.clone()]));
        }
        partitions.resize(number_of_partitions, Frozen::new(Vec::new()));
        return Ok(Frozen::new(partitions));
    }
    let partition_size = len.div_ceil(number_of_partitions);
    trace!(
        len,
        number_of_partitions,
        partition_size,
        "partitioning by size"
    );
    partition_by_size(sequence, partition_size)
}

/// Partition by `preferred_partition_size` unless that yields more than
/// `max_partitions` partitions, in which case fall back to
/// [`partition_into`] with `max_partitions`.
pub fn partition_clamp<T: Clone>(
    sequence: &[T],
    max_partitions: usize,
    preferred_partition_size: usize,
) -> Result<Partitions<T>> {
    require_positive(max_partitions, "max_partitions")?;
    require_positive(preferred_partition_size, "preferred_partition_size")?;
    let preferred_partitions = sequence.len().div_ceil(preferred_partition_size);
    if preferred_partitions <= max_partitions {
        partition_by_size(sequence, preferred_partition_size)
    } else {
        trace!(
            preferred_partitions,
            max_partitions,
            "too many partitions at preferred size, clamping"
        );
        partition_into(sequence, max_partitions)
    }
}

fn require_positive(value: usize, argument: &'static str) -> Result<()> {
    if value == 0 {
        Err(Error::ZeroSize { argument })
    } else {
        Ok(())
    }
}
