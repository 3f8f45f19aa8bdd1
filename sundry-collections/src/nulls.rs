use tracing::debug;

use crate::error::{Error, Result};

/// Unwrap every element, failing on the first absent one.
pub(crate) fn require_non_null<T, I>(items: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.ok_or_else(|| {
                debug!(index, "null element rejected");
                Error::NullElement { index }
            })
        })
        .collect()
}
