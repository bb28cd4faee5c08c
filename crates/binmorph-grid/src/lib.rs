#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Binary grid representation shared by images and structuring elements.
pub mod grid;

/// Error types for the grid module.
pub mod error;

pub use crate::error::GridError;
pub use crate::grid::BitGrid;
