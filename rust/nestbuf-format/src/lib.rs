//! Generated code for the user record FlatBuffers definitions
//! and thin wrappers on top of those.

pub mod defs;
pub mod message;

pub use defs::user_ext::ValueKind;

/// Upper bound of a FlatBuffers buffer: every offset is a signed 32-bit value.
pub const MAX_FLATBUFFER_SIZE: usize = i32::MAX as usize;

/// Size of the root offset that prefixes every finished buffer.
pub const ROOT_OFFSET_SIZE: usize = std::mem::size_of::<u32>();
