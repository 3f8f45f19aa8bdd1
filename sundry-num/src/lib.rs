//! Numeric helpers: decimal digit arithmetic, summary statistics, gcd/lcm
//! and lenient string parsing.

mod digits;
mod error;
mod gcd;
mod parse;
mod stats;

pub use digits::{concat_decimal, decimal_length, DecimalLength};
pub use error::{Error, Result};
pub use gcd::{gcd, lcm};
pub use parse::{
    parse_bit, parse_boolean, parse_boolean_or_bit, parse_byte, parse_byte_radix, parse_double,
    parse_float, parse_int, parse_int_radix, parse_long, parse_long_radix, parse_short,
    parse_short_radix,
};
pub use stats::{average, max, min, sample_std_dev, sample_variance, std_dev, sum, variance, Sample};
