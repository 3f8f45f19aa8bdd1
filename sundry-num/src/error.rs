#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A reduction that needs at least one value received none.
    #[error("at least one value is required")]
    EmptyInput,
    #[error("at least {required} samples are required, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
