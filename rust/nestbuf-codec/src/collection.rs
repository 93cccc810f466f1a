//! Encoding and decoding of `UserList` envelopes.

use log::debug;
use nestbuf_common::{Result, error::Error, try_or_ret_some_err};
use nestbuf_format::defs::user::{self as fb, UserListRef};
use planus::{Builder, Offset, ReadAsRoot};

use crate::{
    config::CodecConfig,
    decoder::{decode_user, decode_vector},
    encoder::encode_user,
    model::User,
    vector::OffsetVector,
};

/// Encodes `users` into a single `UserList` buffer with the default
/// configuration.
pub fn encode_collection(users: &[User]) -> Result<Vec<u8>> {
    encode_collection_with(users, &CodecConfig::default())
}

/// Encodes `users` into a single `UserList` buffer.
///
/// Element `i` of the envelope is `users[i]`. An empty slice produces an
/// envelope without a users vector.
///
/// # Errors
///
/// Returns `BufferLimitExceeded` once the encoded data outgrows
/// `config.max_buffer_size`. The partially built buffer is discarded.
pub fn encode_collection_with(users: &[User], config: &CodecConfig) -> Result<Vec<u8>> {
    let mut builder = Builder::with_capacity(config.collection_capacity(users.len()));
    let mut offsets = OffsetVector::with_capacity(users.len());
    for user in users {
        offsets.push(encode_user(&mut builder, user));
        check_limit(&builder, config)?;
    }
    let users_vector = offsets.finish(&mut builder);
    let root = fb::UserList::create(&mut builder, users_vector);
    let bytes = finish(&mut builder, root, config)?;
    debug!(
        "encoded {} users into a {} byte buffer",
        users.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Decodes every user of a `UserList` buffer, in envelope order.
///
/// An envelope with no users vector, or with an empty one, decodes to an
/// empty `Vec`.
pub fn decode_collection(buf: &[u8]) -> Result<Vec<User>> {
    let list = read_list(buf)?;
    let users = decode_vector(list.users()?, "UserList::users", decode_user)?;
    debug!(
        "decoded {} users from a {} byte buffer",
        users.len(),
        buf.len()
    );
    Ok(users)
}

/// Encodes one user as a single element envelope, using the default
/// configuration.
pub fn encode_single(user: &User) -> Result<Vec<u8>> {
    encode_single_with(user, &CodecConfig::default())
}

pub fn encode_single_with(user: &User, config: &CodecConfig) -> Result<Vec<u8>> {
    let mut builder = Builder::with_capacity(config.initial_capacity.min(config.max_buffer_size));
    let user = encode_user(&mut builder, user);
    check_limit(&builder, config)?;
    let mut users = OffsetVector::with_capacity(1);
    users.push(user);
    let users = users.finish(&mut builder);
    let root = fb::UserList::create(&mut builder, users);
    finish(&mut builder, root, config)
}

/// Decodes the first user of a `UserList` buffer.
///
/// # Errors
///
/// Fails with `InvalidFormat` if the envelope holds no users.
pub fn decode_single(buf: &[u8]) -> Result<User> {
    let list = read_list(buf)?;
    if list.user_count()? == 0 {
        return Err(Error::invalid_format("UserList::users", "no users in buffer"));
    }
    decode_user(list.user_at(0)?)
}

/// Iterates over the users of a `UserList` buffer, decoding one record per
/// step.
pub struct UserIter<'a> {
    list: UserListRef<'a>,
    next: usize,
    len: usize,
}

impl<'a> UserIter<'a> {
    pub fn new(buf: &'a [u8]) -> Result<UserIter<'a>> {
        let list = read_list(buf)?;
        let len = list.user_count()?;
        Ok(UserIter { list, next: 0, len })
    }
}

impl Iterator for UserIter<'_> {
    type Item = Result<User>;

    fn next(&mut self) -> Option<Result<User>> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let user = try_or_ret_some_err!(self.list.user_at(index));
        Some(decode_user(user))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UserIter<'_> {}

fn read_list(buf: &[u8]) -> Result<UserListRef<'_>> {
    UserListRef::read_as_root(buf).map_err(|e| Error::flatbuffer("UserList", e))
}

fn check_limit(builder: &Builder, config: &CodecConfig) -> Result<()> {
    if builder.len() > config.max_buffer_size {
        return Err(Error::buffer_limit_exceeded(
            builder.len(),
            config.max_buffer_size,
        ));
    }
    Ok(())
}

fn finish(builder: &mut Builder, root: Offset<fb::UserList>, config: &CodecConfig) -> Result<Vec<u8>> {
    let bytes = builder.finish(root, None);
    if bytes.len() > config.max_buffer_size {
        return Err(Error::buffer_limit_exceeded(
            bytes.len(),
            config.max_buffer_size,
        ));
    }
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use nestbuf_common::error::ErrorKind;
    use nestbuf_format::message::UserListMessage;

    use super::*;
    use crate::model::DynamicValue;

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("user{id}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_collection_order() {
        let users = (0..5).map(user).collect::<Vec<_>>();
        let bytes = encode_collection(&users).unwrap();
        let message = UserListMessage::new(bytes.clone()).unwrap();
        assert_eq!(message.len(), 5);
        assert_eq!(message.user_at(3).unwrap().id().unwrap(), 3);
        assert_eq!(decode_collection(&bytes).unwrap(), users);
    }

    #[test]
    fn test_empty_collection() {
        let bytes = encode_collection(&[]).unwrap();
        let list = UserListRef::read_as_root(&bytes).unwrap();
        assert!(list.users().unwrap().is_none());
        assert!(decode_collection(&bytes).unwrap().is_empty());
        assert_eq!(UserIter::new(&bytes).unwrap().len(), 0);
    }

    #[test]
    fn test_single() {
        let mut ada = user(1);
        ada.metadata.insert("k".to_string(), DynamicValue::from("v"));
        let bytes = encode_single(&ada).unwrap();
        assert_eq!(decode_single(&bytes).unwrap(), ada);
        assert_eq!(decode_collection(&bytes).unwrap(), vec![ada]);
    }

    #[test]
    fn test_single_from_empty_envelope() {
        let bytes = encode_collection(&[]).unwrap();
        let err = decode_single(&bytes).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidFormat { message, .. } => assert_eq!(message, "no users in buffer"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_user_iter() {
        let users = (10..13).map(user).collect::<Vec<_>>();
        let bytes = encode_collection(&users).unwrap();
        let mut iter = UserIter::new(&bytes).unwrap();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().unwrap().unwrap().id, 10);
        assert_eq!(iter.len(), 2);
        let rest = iter.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(rest, users[1..]);
    }

    #[test]
    fn test_buffer_limit() {
        let users = (0..100).map(user).collect::<Vec<_>>();
        let config = CodecConfig::default().with_max_buffer_size(512);
        let err = encode_collection_with(&users, &config).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::BufferLimitExceeded { limit: 512, .. }
        ));
        assert!(!err.is_malformed_input());

        let err = encode_single_with(&user(1), &config.with_max_buffer_size(8)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::BufferLimitExceeded { .. }));
    }

    #[test]
    fn test_garbage_input() {
        assert!(decode_collection(&[]).is_err());
        assert!(decode_collection(&[0xff; 3]).is_err());
        assert!(decode_single(&[0xff, 0xff, 0xff, 0x0f, 1, 2, 3, 4]).is_err());
        assert!(UserIter::new(&[1]).is_err());
    }
}
