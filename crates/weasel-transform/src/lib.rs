//! Symbolic transform boundary and multi-window word generation
//!
//! The symbolic Fourier approximation itself lives outside this crate;
//! implementors plug in through [`SymbolicTransform`]. The
//! [`WordGenerator`] drives one fitted transform per configured window
//! length, caching each fit behind a compute-once slot, and fans the
//! per-window work out across a fixed set of workers when the `parallel`
//! feature is enabled.

mod generator;
mod transform;

pub use generator::{default_blocks, WordGenerator};
pub use transform::SymbolicTransform;
