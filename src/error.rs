/// Errors produced while building or addressing a [`Nested`] structure.
///
/// [`Nested`]: super::Nested
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The sizes do not describe a usable shape: there are no levels, a level
    /// has size zero, or the leaf count does not fit in a `usize`.
    #[error("invalid shape {0:?}: need at least one level, every size positive, and a leaf count that fits in usize")]
    InvalidShape(Vec<usize>),

    /// The runtime structure disagrees with itself at `level`.
    #[error("shape mismatch at level {level}: {mismatch}")]
    ShapeMismatch { level: usize, mismatch: Mismatch },
}

/// What was wrong with a level of a [`Node`] tree.
///
/// [`Node`]: super::Node
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    #[error("zero-length array")]
    Empty,

    #[error("expected length {expected}, found {found}")]
    Length { expected: usize, found: usize },

    #[error("leaf arrays and nested arrays mixed at the same level")]
    Kind,
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
