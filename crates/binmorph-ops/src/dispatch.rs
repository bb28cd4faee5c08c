use std::fmt;
use std::str::FromStr;

use binmorph_grid::BitGrid;

use crate::error::MorphologyError;
use crate::kernel::Kernel;
use crate::ops;

/// Identifiers for the supported morphological operations.
///
/// The operation set is closed and fixed, so dispatch is a plain match
/// rather than a registration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphOp {
    /// Shrink foreground regions ([`crate::ops::erode`]).
    Erosion,
    /// Grow foreground regions ([`crate::ops::dilate`]).
    Dilation,
    /// Erosion then dilation ([`crate::ops::open`]).
    Opening,
    /// Dilation then erosion ([`crate::ops::close`]).
    Closing,
    /// Foreground minus its eroded form ([`crate::ops::boundary`]).
    Boundary,
    /// Iterative interior growth ([`crate::ops::fill_holes`]).
    HoleFilling,
}

impl MorphOp {
    /// Every operation, in dispatch order.
    pub const ALL: [MorphOp; 6] = [
        MorphOp::Erosion,
        MorphOp::Dilation,
        MorphOp::Opening,
        MorphOp::Closing,
        MorphOp::Boundary,
        MorphOp::HoleFilling,
    ];

    /// Returns the canonical identifier for the operation.
    pub fn name(&self) -> &'static str {
        match self {
            MorphOp::Erosion => "erosion",
            MorphOp::Dilation => "dilation",
            MorphOp::Opening => "opening",
            MorphOp::Closing => "closing",
            MorphOp::Boundary => "boundary",
            MorphOp::HoleFilling => "holeFilling",
        }
    }

    /// Looks up an operation by its canonical identifier.
    pub fn from_name(name: &str) -> Option<MorphOp> {
        MorphOp::ALL.iter().copied().find(|op| op.name() == name)
    }
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MorphOp {
    type Err = MorphologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MorphOp::from_name(s).ok_or_else(|| MorphologyError::UnknownOperation(s.to_string()))
    }
}

/// Applies the selected morphological operation to a grid.
pub fn apply(grid: &BitGrid, op: MorphOp, kernel: &Kernel) -> BitGrid {
    match op {
        MorphOp::Erosion => ops::erode(grid, kernel),
        MorphOp::Dilation => ops::dilate(grid, kernel),
        MorphOp::Opening => ops::open(grid, kernel),
        MorphOp::Closing => ops::close(grid, kernel),
        MorphOp::Boundary => ops::boundary(grid, kernel),
        MorphOp::HoleFilling => ops::fill_holes(grid, kernel),
    }
}

/// Applies the operation named by `name` to a grid.
///
/// An unrecognized name is not an error: the input grid is returned
/// unchanged, as a copy.
///
/// # Examples
///
/// ```
/// use binmorph_grid::BitGrid;
/// use binmorph_ops::{apply_named, Kernel, KernelShape};
///
/// let grid = BitGrid::from_rows(&[vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
/// let kernel = Kernel::new(KernelShape::Box { size: 3 }).unwrap();
///
/// assert_eq!(apply_named(&grid, "not-a-real-op", &kernel), grid);
/// ```
pub fn apply_named(grid: &BitGrid, name: &str, kernel: &Kernel) -> BitGrid {
    match MorphOp::from_name(name) {
        Some(op) => apply(grid, op, kernel),
        None => grid.clone(),
    }
}
