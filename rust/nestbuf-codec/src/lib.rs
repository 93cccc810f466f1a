//! FlatBuffers codec for nested user records.
//!
//! The codec maps the owned record model in [`model`] onto the `UserList`
//! schema of `nestbuf_format`. Writing goes through a single
//! [`planus::Builder`] per call and follows the bottom-up order the builder
//! requires; reading copies the data back out into owned records.

pub mod collection;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod leaf;
pub mod model;
pub mod serializer;
pub mod value;
pub mod vector;

pub use collection::{
    UserIter, decode_collection, decode_single, encode_collection, encode_collection_with,
    encode_single, encode_single_with,
};
pub use config::CodecConfig;
pub use model::{DynamicValue, Link, Metadata, Preferences, PrivacySettings, Profile, Settings, User};
pub use serializer::{FlatBuffersSerializer, Serializer};
