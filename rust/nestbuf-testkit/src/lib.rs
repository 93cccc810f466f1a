//! Test utilities for the nestbuf crates.
//!
//! Currently this is the synthetic record generator in [`data_gen`], used by
//! the codec integration tests.

pub mod data_gen;
