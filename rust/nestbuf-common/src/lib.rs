//! Core definitions (error types and verification helpers), relied upon by all nestbuf-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
