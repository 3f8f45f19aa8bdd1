//! Lenient parsing.
//!
//! Every function accepts either a `&str` or an `Option<&str>` and returns
//! `None` for absent or malformed input, never an error.

use lexical::format::JAVA_STRING;
use lexical::{FromLexical, FromLexicalWithOptions, ParseFloatOptions};
use num_traits::Num;

// Special values are spelled exactly as `Double.toString` writes them.
const FLOAT_OPTIONS: ParseFloatOptions = ParseFloatOptions::builder()
    .nan_string(Some(b"NaN"))
    .inf_string(Some(b"Infinity"))
    .infinity_string(Some(b"Infinity"))
    .build_strict();

macro_rules! parse_integer {
    ($($ty:ty => $name:ident, $radix_name:ident;)*) => {
        $(
            pub fn $name<'a>(s: impl Into<Option<&'a str>>) -> Option<$ty> {
                parse_decimal(s.into()?)
            }

            /// `None` as well for a radix outside `2..=36`.
            pub fn $radix_name<'a>(s: impl Into<Option<&'a str>>, radix: u32) -> Option<$ty> {
                parse_radix(s.into()?, radix)
            }
        )*
    };
}

parse_integer! {
    i8 => parse_byte, parse_byte_radix;
    i16 => parse_short, parse_short_radix;
    i32 => parse_int, parse_int_radix;
    i64 => parse_long, parse_long_radix;
}

/// Parse a float the way `Float.parseFloat` does, ignoring surrounding
/// whitespace and control characters.
///
/// A number may carry one trailing `f`, `F`, `d` or `D` type suffix. `NaN`
/// and `Infinity` are matched case-sensitively and take no suffix.
/// Hexadecimal floats are not supported.
pub fn parse_float<'a>(s: impl Into<Option<&'a str>>) -> Option<f32> {
    parse_java_float(s.into()?)
}

pub fn parse_double<'a>(s: impl Into<Option<&'a str>>) -> Option<f64> {
    parse_java_float(s.into()?)
}

/// `true` or `false`, in any case.
pub fn parse_boolean<'a>(s: impl Into<Option<&'a str>>) -> Option<bool> {
    let s = s.into()?;
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// `1` or `0`.
pub fn parse_bit<'a>(s: impl Into<Option<&'a str>>) -> Option<bool> {
    match s.into()? {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

pub fn parse_boolean_or_bit<'a>(s: impl Into<Option<&'a str>>) -> Option<bool> {
    let s = s.into()?;
    parse_bit(s).or_else(|| parse_boolean(s))
}

fn parse_decimal<T: FromLexical>(s: &str) -> Option<T> {
    lexical::parse::<T, _>(s).ok()
}

fn parse_radix<T: Num>(s: &str, radix: u32) -> Option<T> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    T::from_str_radix(s, radix).ok()
}

fn parse_java_float<T>(s: &str) -> Option<T>
where
    T: FromLexicalWithOptions<Options = ParseFloatOptions>,
{
    let digits = float_digits(s);
    lexical::parse_with_options::<T, _, JAVA_STRING>(digits, &FLOAT_OPTIONS).ok()
}

fn float_digits(s: &str) -> &str {
    let trimmed = s.trim_matches(|c: char| c <= ' ');
    match trimmed.strip_suffix(['f', 'F', 'd', 'D']) {
        Some(digits) if digits.ends_with(|c: char| c.is_ascii_digit() || c == '.') => digits,
        _ => trimmed,
    }
}
