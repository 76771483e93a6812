//! Address record test vectors.

mod address;

pub use address::*;
