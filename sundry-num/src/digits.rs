//! Decimal digit arithmetic on integers, without formatting.

const I32_POWERS: [i32; 9] = [
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

const I64_POWERS: [i64; 18] = [
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

pub trait DecimalLength: Copy {
    /// The length of `self` written in base 10, counting a leading `-`.
    fn decimal_length(self) -> usize;

    /// The number whose decimal digits are those of `self` followed by those
    /// of `other`, so `12.concat_decimal(34) == 1234`.
    ///
    /// Only meaningful for non-negative operands whose concatenation fits in
    /// an `i64`. Anything else wraps silently instead of panicking.
    fn concat_decimal(self, other: Self) -> i64;
}

macro_rules! decimal_length_impl {
    ($ty:ty, $powers:ident) => {
        impl DecimalLength for $ty {
            fn decimal_length(self) -> usize {
                // negative values compare against negated powers, as the
                // magnitude of MIN is not representable
                if self < 0 {
                    2 + $powers.iter().take_while(|&&power| self <= -power).count()
                } else {
                    1 + $powers.iter().take_while(|&&power| self >= power).count()
                }
            }

            fn concat_decimal(self, other: Self) -> i64 {
                let shift = 10i64.wrapping_pow(other.decimal_length() as u32);
                i64::from(self)
                    .wrapping_mul(shift)
                    .wrapping_add(i64::from(other))
            }
        }
    };
}

decimal_length_impl!(i32, I32_POWERS);
decimal_length_impl!(i64, I64_POWERS);

pub fn decimal_length<T: DecimalLength>(x: T) -> usize {
    x.decimal_length()
}

pub fn concat_decimal<T: DecimalLength>(a: T, b: T) -> i64 {
    a.concat_decimal(b)
}
