use nestbuf_common::{Result, error::Error, verify_data};
use planus::ReadAsRoot;

use crate::{
    ROOT_OFFSET_SIZE,
    defs::user::{UserListRef, UserRef},
};

/// An owned, validated `UserList` buffer.
///
/// The buffer root and the users vector are checked once on construction.
/// Table references handed out by the message borrow from it, so they cannot
/// outlive the underlying bytes.
#[derive(Clone)]
pub struct UserListMessage {
    buf: Vec<u8>,
    len: usize,
}

impl UserListMessage {
    /// Wraps an encoded `UserList` buffer after validating its root.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is shorter than the root offset, the root
    /// table cannot be located, or the users vector is corrupted.
    pub fn new(buf: Vec<u8>) -> Result<UserListMessage> {
        verify_data!(buf, buf.len() >= ROOT_OFFSET_SIZE);
        let len = {
            let list = UserListRef::read_as_root(&buf)
                .map_err(|e| Error::flatbuffer("UserList", e))?;
            list.user_count()?
        };
        Ok(UserListMessage { buf, len })
    }

    /// Number of users in the message.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the zero-copy root table of the message.
    pub fn user_list(&self) -> Result<UserListRef<'_>> {
        Ok(UserListRef::read_as_root(&self.buf)?)
    }

    /// Returns the zero-copy user table at `index`.
    pub fn user_at(&self, index: usize) -> Result<UserRef<'_>> {
        self.user_list()?.user_at(index)
    }

    /// Provides access to the raw bytes of the message.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl std::fmt::Debug for UserListMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListMessage")
            .field("bytes", &self.buf.len())
            .field("users", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::UserListMessage;
    use crate::defs::user::{User, UserList};

    #[test]
    fn test_user_list_message() {
        let list = UserList {
            users: Some(vec![User {
                name: Some("ada".to_string()),
                age: 36,
                ..Default::default()
            }]),
        };
        let bytes = planus::Builder::new().finish(&list, None).to_vec();
        let message = UserListMessage::new(bytes).unwrap();
        assert_eq!(message.len(), 1);
        assert!(!message.is_empty());

        let user = message.user_at(0).unwrap();
        assert_eq!(user.name().unwrap(), Some("ada"));
        assert_eq!(user.age().unwrap(), 36);
        assert_eq!(user.email().unwrap(), None);
        assert!(message.user_at(1).is_err());
    }

    #[test]
    fn test_user_list_message_rejects_garbage() {
        assert!(UserListMessage::new(vec![]).is_err());
        assert!(UserListMessage::new(vec![1, 2]).is_err());
        let err = UserListMessage::new(vec![0xff, 0xff, 0xff, 0x7f, 0, 0, 0, 0]).unwrap_err();
        assert!(err.is_malformed_input());
    }
}
