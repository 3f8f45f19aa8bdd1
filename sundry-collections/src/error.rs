/// Errors raised by the collection factories and transforms.
///
/// Every error is reported at the point of the offending call; no partially
/// built collection is handed back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A required argument handle was not supplied.
    #[error("argument `{argument}` was not supplied")]
    NullArgument { argument: &'static str },
    /// A non-nullable variant received an absent element.
    #[error("element at index {index} is null")]
    NullElement { index: usize },
    /// A map factory received an absent key.
    #[error("map key at index {index} is null")]
    NullKey { index: usize },
    /// A non-nullable map factory received an absent value.
    #[error("map value at index {index} is null")]
    NullValue { index: usize },
    /// A set factory received arguments that are not pairwise unique.
    ///
    /// Only the counts are known: `expected` arguments collapsed into
    /// `actual` distinct elements.
    #[error("duplicate arguments ({expected} given, {actual} distinct)")]
    DuplicateElement { expected: usize, actual: usize },
    /// Two entries produced the same key.
    #[error("duplicate key at index {index} not allowed")]
    DuplicateKey { index: usize },
    /// Mutation of an immutable collection, directly or through an in-place
    /// function.
    #[error("immutable collection cannot be mutated")]
    UnsupportedMutation,
    /// A size or count argument was zero.
    #[error("`{argument}` must be greater than zero")]
    ZeroSize { argument: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_messages() {
        assert_snapshot!(
            Error::NullElement { index: 3 }.to_string(),
            @"element at index 3 is null"
        );
        assert_snapshot!(
            Error::DuplicateElement { expected: 4, actual: 3 }.to_string(),
            @"duplicate arguments (4 given, 3 distinct)"
        );
        assert_snapshot!(
            Error::ZeroSize { argument: "max_partition_size" }.to_string(),
            @"`max_partition_size` must be greater than zero"
        );
        assert_snapshot!(
            Error::NullArgument { argument: "containers" }.to_string(),
            @"argument `containers` was not supplied"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        insta::assert_yaml_snapshot!(Error::NullElement { index: 3 }, @r"
        NullElement:
          index: 3
        ");
        insta::assert_yaml_snapshot!(Error::UnsupportedMutation, @"UnsupportedMutation");
    }
}
