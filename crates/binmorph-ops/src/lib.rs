#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types used for morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Kernel (structuring element) types and generators.
pub mod kernel;
pub use kernel::{Kernel, KernelShape};

/// Neighbor sampling primitive shared by all operations.
pub mod sample;
pub use sample::sample_neighbors;

/// The six morphological operations:
/// - `erode` / `dilate`: single-pass primitives.
/// - `open` / `close`: compositions of the primitives.
/// - `boundary`: foreground minus its eroded form.
/// - `fill_holes`: iterative fixed-point growth over interior cells.
pub mod ops;
pub use ops::{boundary, close, dilate, erode, fill_holes, open};

/// Operation identifiers and dispatch.
pub mod dispatch;
pub use dispatch::{apply, apply_named, MorphOp};
