//! Flattening of nested heterogeneous values.
//!
//! Callers describe their input as a tree of [`FlattenInput`] values; the
//! [`flatten!`](crate::flatten!) macro converts each argument with `From`,
//! so nested `Vec`s, arrays, slices and `Option`s of primitives can be
//! passed directly.

use ordered_float::OrderedFloat;

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Scalar {
    Bool(bool),
    Char(char),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(OrderedFloat<f32>),
    Double(OrderedFloat<f64>),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FlattenInput {
    Scalar(Scalar),
    Sequence(Vec<FlattenInput>),
    /// Kept in the output as a `None` placeholder.
    Null,
}

/// Expand every sequence, at any depth, into one flat list.
///
/// Scalars keep their relative order and nulls become `None`. An empty
/// sequence contributes nothing.
pub fn flatten(values: impl IntoIterator<Item = FlattenInput>) -> Vec<Option<Scalar>> {
    let mut flat = Vec::new();
    for value in values {
        flatten_into(value, &mut flat);
    }
    flat
}

fn flatten_into(value: FlattenInput, flat: &mut Vec<Option<Scalar>>) {
    match value {
        FlattenInput::Scalar(scalar) => flat.push(Some(scalar)),
        FlattenInput::Null => flat.push(None),
        FlattenInput::Sequence(values) => {
            for value in values {
                flatten_into(value, flat);
            }
        }
    }
}

/// Flatten any number of values convertible into [`FlattenInput`].
///
/// ```
/// use sundry_collections::{flatten, Scalar};
///
/// let flat = flatten![1i32, vec![2i32, 3], None::<i32>];
/// assert_eq!(
///     flat,
///     vec![Some(Scalar::Int(1)), Some(Scalar::Int(2)), Some(Scalar::Int(3)), None]
/// );
/// ```
#[macro_export]
macro_rules! flatten {
    ($($value:expr),* $(,)?) => {
        $crate::flatten([$($crate::FlattenInput::from($value)),*])
    };
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value.into())
                }
            }

            impl From<$ty> for FlattenInput {
                fn from(value: $ty) -> Self {
                    FlattenInput::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    char => Char,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    &str => String,
}

impl From<Scalar> for FlattenInput {
    fn from(scalar: Scalar) -> Self {
        FlattenInput::Scalar(scalar)
    }
}

impl<X: Into<FlattenInput>> From<Option<X>> for FlattenInput {
    fn from(value: Option<X>) -> Self {
        value.map_or(FlattenInput::Null, Into::into)
    }
}

impl<X: Into<FlattenInput>> From<Vec<X>> for FlattenInput {
    fn from(values: Vec<X>) -> Self {
        FlattenInput::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<X: Into<FlattenInput>, const N: usize> From<[X; N]> for FlattenInput {
    fn from(values: [X; N]) -> Self {
        FlattenInput::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<X: Into<FlattenInput> + Clone> From<&[X]> for FlattenInput {
    fn from(values: &[X]) -> Self {
        FlattenInput::Sequence(values.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested() {
        let flat = crate::flatten![
            1i32,
            vec![vec![2i64], vec![], vec![3i64]],
            "x",
            [true, false],
        ];
        assert_eq!(
            flat,
            vec![
                Some(Scalar::Int(1)),
                Some(Scalar::Long(2)),
                Some(Scalar::Long(3)),
                Some(Scalar::String("x".to_string())),
                Some(Scalar::Bool(true)),
                Some(Scalar::Bool(false)),
            ]
        );
    }

    #[test]
    fn test_flatten_keeps_nulls() {
        let flat = crate::flatten![None::<i8>, vec![Some('a'), None], 1.5f64];
        assert_eq!(
            flat,
            vec![
                None,
                Some(Scalar::Char('a')),
                None,
                Some(Scalar::Double(OrderedFloat(1.5))),
            ]
        );
    }

    #[test]
    fn test_flatten_slices() {
        let shorts: &[i16] = &[1, 2];
        let flat = flatten([FlattenInput::from(shorts), FlattenInput::from(2.5f32)]);
        assert_eq!(
            flat,
            vec![
                Some(Scalar::Short(1)),
                Some(Scalar::Short(2)),
                Some(Scalar::Float(OrderedFloat(2.5))),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_scalars() {
        insta::assert_yaml_snapshot!(Scalar::Int(3), @"Int: 3");
        insta::assert_yaml_snapshot!(Scalar::Double(OrderedFloat(1.5)), @"Double: 1.5");
        insta::assert_yaml_snapshot!(FlattenInput::Null, @"Null");
    }

    #[test]
    fn test_flatten_empty() {
        assert!(crate::flatten![].is_empty());
        assert!(flatten([FlattenInput::Sequence(vec![])]).is_empty());
    }
}
