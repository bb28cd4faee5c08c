#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use binmorph_grid as grid;

#[doc(inline)]
pub use binmorph_ops as ops;
