//! Format-agnostic serializer interface and its FlatBuffers implementation.

use nestbuf_common::Result;

use crate::{
    collection::{decode_collection, decode_single, encode_collection_with, encode_single_with},
    config::CodecConfig,
    model::User,
};

/// Encodes and decodes user records to and from a byte representation.
///
/// Implementations are stateless with respect to the records they process and
/// can be shared between threads.
pub trait Serializer: Send + Sync {
    /// Short, human readable name of the format.
    fn name(&self) -> &str;

    fn marshal(&self, user: &User) -> Result<Vec<u8>>;

    fn unmarshal(&self, data: &[u8]) -> Result<User>;

    fn marshal_users(&self, users: &[User]) -> Result<Vec<u8>>;

    fn unmarshal_users(&self, data: &[u8]) -> Result<Vec<User>>;
}

/// [`Serializer`] producing `UserList` FlatBuffers.
///
/// A single record is stored as a one-element list, so the output of
/// `marshal` can also be read with `unmarshal_users`.
#[derive(Debug, Clone, Default)]
pub struct FlatBuffersSerializer {
    config: CodecConfig,
}

impl FlatBuffersSerializer {
    pub fn new() -> FlatBuffersSerializer {
        FlatBuffersSerializer::default()
    }

    pub fn with_config(config: CodecConfig) -> Result<FlatBuffersSerializer> {
        config.validate()?;
        Ok(FlatBuffersSerializer { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Serializer for FlatBuffersSerializer {
    fn name(&self) -> &str {
        "FlatBuffers"
    }

    fn marshal(&self, user: &User) -> Result<Vec<u8>> {
        encode_single_with(user, &self.config)
    }

    fn unmarshal(&self, data: &[u8]) -> Result<User> {
        decode_single(data)
    }

    fn marshal_users(&self, users: &[User]) -> Result<Vec<u8>> {
        encode_collection_with(users, &self.config)
    }

    fn unmarshal_users(&self, data: &[u8]) -> Result<Vec<User>> {
        decode_collection(data)
    }
}

#[cfg(test)]
mod tests {
    use super::{FlatBuffersSerializer, Serializer};
    use crate::{config::CodecConfig, model::User};

    #[test]
    fn test_serializer_facade() {
        let serializer: Box<dyn Serializer> = Box::new(FlatBuffersSerializer::new());
        assert_eq!(serializer.name(), "FlatBuffers");

        let user = User {
            id: 5,
            email: "e@x".to_string(),
            ..Default::default()
        };
        let bytes = serializer.marshal(&user).unwrap();
        assert_eq!(serializer.unmarshal(&bytes).unwrap(), user);
        assert_eq!(serializer.unmarshal_users(&bytes).unwrap(), vec![user.clone()]);

        let bytes = serializer.marshal_users(&[user.clone(), User::default()]).unwrap();
        assert_eq!(serializer.unmarshal(&bytes).unwrap(), user);
        assert_eq!(serializer.unmarshal_users(&bytes).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(FlatBuffersSerializer::with_config(CodecConfig::default().with_max_buffer_size(0)).is_err());
        let serializer =
            FlatBuffersSerializer::with_config(CodecConfig::default().with_initial_capacity(64))
                .unwrap();
        assert_eq!(serializer.config().initial_capacity, 64);
    }
}
