/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    /// The provided kernel has no cells.
    #[error("Kernel must have at least one cell")]
    EmptyKernel,

    /// The kernel rows do not form a square.
    #[error("Kernel must be square, row {0} has length {1} for side {2}")]
    NonSquareKernel(usize, usize, usize),

    /// The kernel side length is even, so no unique center exists.
    #[error("Kernel side length must be odd, got {0}")]
    EvenSidedKernel(usize),

    /// The kernel data length does not match its side length.
    #[error("Kernel data length ({0}) does not match side length squared ({1})")]
    InvalidDataLength(usize, usize),

    /// A kernel cell holds a value other than 0 or 1.
    #[error("Kernel cell at index {0} holds {1}, expected 0 or 1")]
    NonBinaryCell(usize, u8),

    /// An operation identifier outside the supported set.
    #[error("Unknown operation identifier: {0}")]
    UnknownOperation(String),
}
