use proptest::prelude::*;

use sundry_collections::hash::HashSet;
use sundry_collections::{
    difference, intersection, partition_by_size, partition_clamp, partition_into,
    symmetric_difference, union,
};

fn concat(partitions: &[sundry_collections::ImmutableList<i32>]) -> Vec<i32> {
    partitions.iter().flat_map(|p| p.iter().copied()).collect()
}

proptest! {
    #[test]
    fn by_size_round_trips(
        source in prop::collection::vec(any::<i32>(), 0..200),
        size in 1usize..50,
    ) {
        let partitions = partition_by_size(&source, size).unwrap();
        prop_assert_eq!(concat(&partitions), source.clone());
        let (last, rest) = partitions.split_last().unwrap();
        prop_assert!(rest.iter().all(|p| p.len() == size));
        prop_assert!(last.len() <= size);
    }

    #[test]
    fn into_partition_count(
        source in prop::collection::vec(any::<i32>(), 0..200),
        n in 1usize..50,
    ) {
        let partitions = partition_into(&source, n).unwrap();
        prop_assert_eq!(concat(&partitions), source.clone());
        if source.len() < n {
            prop_assert_eq!(partitions.len(), n);
            let singletons = partitions.iter().filter(|p| p.len() == 1).count();
            prop_assert_eq!(singletons, source.len());
            prop_assert!(partitions.iter().all(|p| p.len() <= 1));
        } else {
            let chunk = source.len().div_ceil(n);
            prop_assert_eq!(partitions.len(), source.len().div_ceil(chunk));
            prop_assert!(partitions.len() <= n);
        }
    }

    #[test]
    fn clamp_never_exceeds_max(
        source in prop::collection::vec(any::<i32>(), 0..200),
        max in 1usize..20,
        preferred in 1usize..50,
    ) {
        let partitions = partition_clamp(&source, max, preferred).unwrap();
        prop_assert_eq!(concat(&partitions), source.clone());
        prop_assert!(partitions.len() <= max.max(1));
    }

    #[test]
    fn set_identities(
        a in prop::collection::hash_set(0u8..64, 0..32),
        b in prop::collection::hash_set(0u8..64, 0..32),
    ) {
        let a = a.into_iter().collect::<HashSet<_>>();
        let b = b.into_iter().collect::<HashSet<_>>();
        prop_assert_eq!(union(&a, &b), union(&b, &a));
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
        prop_assert_eq!(
            symmetric_difference(&a, &b),
            union(&difference(&a, &b), &difference(&b, &a))
        );
        prop_assert!(difference(&a, &a).is_empty());
    }
}
