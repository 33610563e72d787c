#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AdtError {
    /// A required element, list or buffer argument was `None`.
    #[error("{what} must not be null")]
    NullArgument { what: &'static str },
    #[error("index (is {index}) out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("collection is empty")]
    EmptyCollection,
    #[error("iteration has no more elements")]
    IterationExhausted,
}

#[cfg(feature = "collections")]
impl AdtError {
    #[inline]
    pub(crate) const fn null(what: &'static str) -> Self {
        Self::NullArgument { what }
    }
}

/// Unwraps a nullable argument or reports which argument was missing.
#[cfg(feature = "collections")]
#[inline]
pub(crate) fn non_null<T>(value: impl Into<Option<T>>, what: &'static str) -> Result<T, AdtError> {
    value.into().ok_or(AdtError::null(what))
}
