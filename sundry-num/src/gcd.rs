use num_traits::{CheckedRem, PrimInt, Signed, WrappingMul, WrappingNeg};

/// The greatest common divisor by Euclid's algorithm, with `gcd(0, 0) == 0`.
///
/// Operands are made non-negative first. The magnitude of `MIN` does not fit,
/// so it stays `MIN` and the result for it is meaningless but never panics.
pub fn gcd<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed + CheckedRem + WrappingNeg,
{
    if a.is_zero() && b.is_zero() {
        return T::zero();
    }
    let mut a = wrapping_abs(a);
    let mut b = wrapping_abs(b);
    while !b.is_zero() {
        let remainder = a.checked_rem(&b).unwrap_or_else(T::zero);
        a = b;
        b = remainder;
    }
    a
}

/// The least common multiple `|a| / gcd(a, b) * |b|`, zero when either
/// operand is zero. Overflow wraps.
pub fn lcm<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed + CheckedRem + WrappingNeg + WrappingMul,
{
    if a.is_zero() && b.is_zero() {
        return T::zero();
    }
    let a_abs = wrapping_abs(a);
    // only MIN / -1 overflows, and wraps back to MIN
    let quotient = a_abs
        .checked_div(&gcd(a, b))
        .unwrap_or_else(|| a_abs.wrapping_neg());
    quotient.wrapping_mul(&wrapping_abs(b))
}

fn wrapping_abs<T: PrimInt + Signed + WrappingNeg>(x: T) -> T {
    if x.is_negative() {
        x.wrapping_neg()
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(-54, 24, 6)]
    #[case(54, -24, 6)]
    #[case(0, 0, 0)]
    #[case(0, -7, 7)]
    #[case(12, 0, 12)]
    #[case(17, 5, 1)]
    #[case(i32::MAX, i32::MAX, i32::MAX)]
    fn test_gcd(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
        assert_eq!(gcd(a, b), expected);
        assert_eq!(gcd(b, a), expected);
    }

    #[rstest]
    #[case(36, 0, 0)]
    #[case(0, 0, 0)]
    #[case(4, 6, 12)]
    #[case(-4, 6, 12)]
    #[case(21, 6, 42)]
    fn test_lcm(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        assert_eq!(lcm(a, b), expected);
        assert_eq!(lcm(b, a), expected);
    }

    #[test]
    fn test_min_does_not_panic() {
        assert_eq!(gcd(i32::MIN, 0), i32::MIN);
        gcd(i64::MIN, -1);
        gcd(i8::MIN, i8::MIN);
        lcm(i32::MIN, 0);
        lcm(i32::MIN, -1);
        lcm(i16::MIN, 3);
    }
}
