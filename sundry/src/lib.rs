//! Collection and numeric utilities.
//!
//! ```
//! use sundry::collections::partition_into;
//! use sundry::num::gcd;
//!
//! let partitions = partition_into(&[0, 1, 2], 5).unwrap();
//! assert_eq!(partitions.len(), 5);
//! assert_eq!(gcd(-54, 24), 6);
//! ```

pub use sundry_collections as collections;
pub use sundry_num as num;
