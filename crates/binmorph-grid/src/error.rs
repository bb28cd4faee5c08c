/// An error type for constructing binary grids.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Error when the grid has zero width or height.
    #[error("Grid dimensions must be non-zero, got {0}x{1}")]
    ZeroSizedGrid(usize, usize),

    /// Error when the cell data length does not match the grid dimensions.
    #[error("Cell data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the rows of a nested-row grid have inconsistent lengths.
    #[error("Row {0} has length {1}, expected {2}")]
    NonRectangularRows(usize, usize, usize),

    /// Error when a cell holds a value other than 0 or 1.
    #[error("Cell at index {0} holds {1}, expected 0 or 1")]
    NonBinaryCell(usize, u8),
}
