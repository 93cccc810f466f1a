//! Extensions over the generated user record definitions.
//!
//! The metadata entry discriminant is stored as a raw `ubyte` on the wire so that
//! readers can tolerate tags they do not know. [`ValueKind`] is the typed view of it.

use nestbuf_common::{Result, error::Error};

use crate::defs::user::{MetadataEntryRef, UserListRef, UserRef};

/// Discriminant of a dynamically typed metadata value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum ValueKind {
    String = 0,
    Int = 1,
    Bool = 2,
    Float = 3,
}

impl ValueKind {
    /// Array containing all valid variants of `ValueKind`.
    pub const ENUM_VALUES: [Self; 4] = [Self::String, Self::Int, Self::Bool, Self::Float];

    /// Maps a wire tag to its kind, `None` for tags outside of the known range.
    #[inline]
    pub fn from_tag(tag: u8) -> Option<ValueKind> {
        match tag {
            0 => Some(ValueKind::String),
            1 => Some(ValueKind::Int),
            2 => Some(ValueKind::Bool),
            3 => Some(ValueKind::Float),
            _ => None,
        }
    }

    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Float => "float",
        }
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<ValueKind> {
        ValueKind::from_tag(tag).ok_or_else(|| {
            Error::invalid_format("MetadataEntry::value_type", format!("unknown tag {tag}"))
        })
    }
}

impl From<ValueKind> for u8 {
    fn from(kind: ValueKind) -> u8 {
        kind.tag()
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl MetadataEntryRef<'_> {
    /// Returns the typed discriminant of the entry, or `None` when the stored
    /// tag is not one of the known kinds.
    pub fn value_kind(&self) -> Result<Option<ValueKind>> {
        Ok(ValueKind::from_tag(self.value_type()?))
    }
}

impl<'a> UserListRef<'a> {
    /// Number of users in the envelope. An absent vector counts as empty.
    pub fn user_count(&self) -> Result<usize> {
        Ok(self.users()?.map_or(0, |users| users.len()))
    }

    /// Retrieves the user at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error if the envelope does not hold an element
    /// at `index`, and an `InvalidFlatBuffer` error if the element cannot be read.
    pub fn user_at(&self, index: usize) -> Result<UserRef<'a>> {
        let users = self
            .users()?
            .ok_or_else(|| Error::invalid_format("UserList::users", "vector is absent"))?;
        let user = users.get(index).ok_or_else(|| {
            Error::invalid_format(
                "UserList::users",
                format!("index {index} out of range ({})", users.len()),
            )
        })??;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use planus::ReadAsRoot;

    use super::ValueKind;
    use crate::defs::user::{MetadataEntry, MetadataEntryRef, User, UserList, UserListRef};

    #[test]
    fn test_value_kind_tags() {
        for kind in ValueKind::ENUM_VALUES {
            assert_eq!(ValueKind::from_tag(kind.tag()), Some(kind));
            assert_eq!(ValueKind::try_from(u8::from(kind)).unwrap(), kind);
        }
        assert_eq!(ValueKind::from_tag(4), None);
        assert!(ValueKind::try_from(200u8).is_err());
        assert_eq!(ValueKind::Float.to_string(), "float");
    }

    #[test]
    fn test_metadata_entry_kind() {
        let entry = MetadataEntry {
            key: Some("retries".to_string()),
            value_type: ValueKind::Int.tag(),
            int_value: 3,
            ..Default::default()
        };
        let bytes = planus::Builder::new().finish(&entry, None).to_vec();
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(entry.value_kind().unwrap(), Some(ValueKind::Int));
        assert_eq!(entry.int_value().unwrap(), 3);
        assert_eq!(entry.string_value().unwrap(), None);

        let unknown = MetadataEntry {
            value_type: 9,
            ..Default::default()
        };
        let bytes = planus::Builder::new().finish(&unknown, None).to_vec();
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(entry.value_kind().unwrap(), None);
    }

    #[test]
    fn test_user_list_access() {
        let empty = UserList::default();
        let bytes = planus::Builder::new().finish(&empty, None).to_vec();
        let list = UserListRef::read_as_root(&bytes).unwrap();
        assert_eq!(list.user_count().unwrap(), 0);
        assert!(list.user_at(0).is_err());

        let list = UserList {
            users: Some(vec![
                User {
                    id: 7,
                    ..Default::default()
                },
                User {
                    id: 8,
                    ..Default::default()
                },
            ]),
        };
        let bytes = planus::Builder::new().finish(&list, None).to_vec();
        let list = UserListRef::read_as_root(&bytes).unwrap();
        assert_eq!(list.user_count().unwrap(), 2);
        assert_eq!(list.user_at(1).unwrap().id().unwrap(), 8);
        let err = list.user_at(2).unwrap_err();
        assert!(err.is_malformed_input());
    }
}
