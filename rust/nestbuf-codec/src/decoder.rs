//! Composite record decoder.
//!
//! Decoding copies everything out of the buffer, so the returned records do
//! not borrow it. Fields missing from the buffer decode to their defaults:
//! strings to `""`, scalars to zero, nested records to `Default`, vectors and
//! maps to empty collections.

use std::hash::Hash;

use ahash::AHashMap;
use nestbuf_common::{Result, error::Error};
use nestbuf_format::defs::user::{PreferencesRef, ProfileRef, SettingsRef, UserRef};

use crate::{
    leaf::{decode_limit, decode_link, decode_notification, decode_privacy},
    model::{Preferences, Profile, Settings, User},
    value::decode_entry,
};

/// Copies an optional string field, an absent field becomes `""`.
#[inline]
pub(crate) fn owned_str(s: Option<&str>) -> String {
    s.map(str::to_string).unwrap_or_default()
}

/// Decodes every element of an optional vector, in index order.
///
/// An absent vector yields an empty `Vec`. An element that cannot be reached
/// or read fails the whole vector.
pub(crate) fn decode_vector<'a, R, T>(
    vector: Option<planus::Vector<'a, planus::Result<R>>>,
    element: &str,
    mut decode: impl FnMut(R) -> Result<T>,
) -> Result<Vec<T>>
where
    planus::Result<R>: planus::VectorRead<'a>,
{
    let Some(vector) = vector else {
        return Ok(Vec::new());
    };
    let len = vector.len();
    let mut items = Vec::with_capacity(len);
    for index in 0..len {
        let item = vector
            .get(index)
            .ok_or_else(|| {
                Error::invalid_format(element, format!("missing element {index} of {len}"))
            })?
            .map_err(|e| Error::flatbuffer(element, e))?;
        items.push(decode(item)?);
    }
    Ok(items)
}

/// Decodes a vector of key/value entries into a map. Entries are inserted in
/// index order, so a repeated key keeps the value of its last entry.
pub(crate) fn decode_map<'a, R, K, V>(
    vector: Option<planus::Vector<'a, planus::Result<R>>>,
    element: &str,
    decode: impl FnMut(R) -> Result<(K, V)>,
) -> Result<AHashMap<K, V>>
where
    planus::Result<R>: planus::VectorRead<'a>,
    K: Eq + Hash,
{
    let entries = decode_vector(vector, element, decode)?;
    let mut map = AHashMap::with_capacity(entries.len());
    map.extend(entries);
    Ok(map)
}

/// Accessor errors raised while reading a table's own fields are reported
/// against that table; errors from nested tables keep the nested name.
pub fn decode_user(user: UserRef<'_>) -> Result<User> {
    read_user(user).map_err(|e| e.with_element("User"))
}

fn read_user(user: UserRef<'_>) -> Result<User> {
    let profile = match user.profile()? {
        Some(profile) => decode_profile(profile)?,
        None => Profile::default(),
    };
    let settings = match user.settings()? {
        Some(settings) => decode_settings(settings)?,
        None => Settings::default(),
    };
    Ok(User {
        id: user.id()?,
        name: owned_str(user.name()?),
        email: owned_str(user.email()?),
        age: user.age()?,
        is_active: user.is_active()?,
        created_at: user.created_at()?,
        tags: decode_vector(user.tags()?, "User::tags", |tag| Ok(tag.to_string()))?,
        profile,
        settings,
        metadata: decode_map(user.metadata()?, "User::metadata", decode_entry)?,
    })
}

pub fn decode_profile(profile: ProfileRef<'_>) -> Result<Profile> {
    read_profile(profile).map_err(|e| e.with_element("Profile"))
}

fn read_profile(profile: ProfileRef<'_>) -> Result<Profile> {
    let preferences = match profile.preferences()? {
        Some(preferences) => decode_preferences(preferences)?,
        None => Preferences::default(),
    };
    Ok(Profile {
        first_name: owned_str(profile.first_name()?),
        last_name: owned_str(profile.last_name()?),
        bio: owned_str(profile.bio()?),
        avatar: owned_str(profile.avatar()?),
        social_links: decode_vector(
            profile.social_links()?,
            "Profile::social_links",
            decode_link,
        )?,
        preferences,
    })
}

pub fn decode_preferences(preferences: PreferencesRef<'_>) -> Result<Preferences> {
    read_preferences(preferences).map_err(|e| e.with_element("Preferences"))
}

fn read_preferences(preferences: PreferencesRef<'_>) -> Result<Preferences> {
    let privacy = match preferences.privacy()? {
        Some(privacy) => decode_privacy(privacy)?,
        None => Default::default(),
    };
    Ok(Preferences {
        theme: owned_str(preferences.theme()?),
        language: owned_str(preferences.language()?),
        notifications: decode_map(
            preferences.notifications()?,
            "Preferences::notifications",
            decode_notification,
        )?,
        privacy,
    })
}

pub fn decode_settings(settings: SettingsRef<'_>) -> Result<Settings> {
    read_settings(settings).map_err(|e| e.with_element("Settings"))
}

fn read_settings(settings: SettingsRef<'_>) -> Result<Settings> {
    Ok(Settings {
        language: owned_str(settings.language()?),
        timezone: owned_str(settings.timezone()?),
        features: decode_vector(settings.features()?, "Settings::features", |feature| {
            Ok(feature.to_string())
        })?,
        limits: decode_map(settings.limits()?, "Settings::limits", decode_limit)?,
    })
}

#[cfg(test)]
mod tests {
    use nestbuf_common::error::ErrorKind;
    use nestbuf_format::defs::user::{
        self as fb, LimitSetting, MetadataEntry, Settings as SettingsTable, SettingsRef, UserRef,
    };
    use planus::{Builder, ReadAsRoot};

    use super::{decode_settings, decode_user, owned_str};
    use crate::model::{DynamicValue, User};

    #[test]
    fn test_owned_str() {
        assert_eq!(owned_str(None), "");
        assert_eq!(owned_str(Some("abc")), "abc");
    }

    #[test]
    fn test_absent_fields_decode_to_defaults() {
        let bytes = Builder::new().finish(&fb::User::default(), None).to_vec();
        let user = decode_user(UserRef::read_as_root(&bytes).unwrap()).unwrap();
        assert_eq!(user, User::default());
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let settings = SettingsTable {
            limits: Some(vec![
                LimitSetting {
                    key: Some("max".to_string()),
                    value: 1,
                },
                LimitSetting {
                    key: Some("min".to_string()),
                    value: 0,
                },
                LimitSetting {
                    key: Some("max".to_string()),
                    value: 2,
                },
            ]),
            ..Default::default()
        };
        let bytes = Builder::new().finish(&settings, None).to_vec();
        let settings = decode_settings(SettingsRef::read_as_root(&bytes).unwrap()).unwrap();
        assert_eq!(settings.limits.len(), 2);
        assert_eq!(settings.limits["max"], 2);
        assert_eq!(settings.limits["min"], 0);

        let user = fb::User {
            metadata: Some(vec![
                MetadataEntry {
                    key: Some("k".to_string()),
                    value_type: 1,
                    int_value: 1,
                    ..Default::default()
                },
                MetadataEntry {
                    key: Some("k".to_string()),
                    value_type: 2,
                    bool_value: true,
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        let bytes = Builder::new().finish(&user, None).to_vec();
        let user = decode_user(UserRef::read_as_root(&bytes).unwrap()).unwrap();
        assert_eq!(user.metadata.len(), 1);
        assert_eq!(user.metadata["k"], DynamicValue::Bool(true));
    }

    #[test]
    fn test_empty_vectors_decode_to_empty() {
        let user = fb::User {
            tags: Some(vec![]),
            metadata: Some(vec![]),
            ..Default::default()
        };
        let bytes = Builder::new().finish(&user, None).to_vec();
        let user = decode_user(UserRef::read_as_root(&bytes).unwrap()).unwrap();
        assert!(user.tags.is_empty());
        assert!(user.metadata.is_empty());
    }

    #[test]
    fn test_corrupted_string_fails() {
        let mut builder = Builder::new();
        let name = builder.create_string("ada");
        let root = fb::User::create(
            &mut builder,
            7i64,
            name,
            (),
            0i32,
            false,
            (),
            (),
            (),
            (),
            0i64,
        );
        let mut bytes = builder.finish(root, None).to_vec();
        // The string length prefix is the 4 bytes ahead of "ada".
        let at = bytes.windows(3).position(|w| w == b"ada").unwrap() - 4;
        bytes[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());

        let user = UserRef::read_as_root(&bytes).unwrap();
        let err = decode_user(user).unwrap_err();
        assert!(err.is_malformed_input());
        match err.kind() {
            ErrorKind::InvalidFlatBuffer { element, .. } => assert_eq!(element, "User"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(
            err.to_string()
                .starts_with("invalid FlatBuffers format for 'User'")
        );
    }

    #[test]
    fn test_corrupted_nested_string_names_nested_table() {
        let mut builder = Builder::new();
        let bio = builder.create_string("compilers");
        let profile = fb::Profile::create(&mut builder, (), (), bio, (), (), ());
        let root = fb::User::create(
            &mut builder,
            7i64,
            (),
            (),
            0i32,
            false,
            profile,
            (),
            (),
            (),
            0i64,
        );
        let mut bytes = builder.finish(root, None).to_vec();
        let at = bytes.windows(9).position(|w| w == b"compilers").unwrap() - 4;
        bytes[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());

        let user = UserRef::read_as_root(&bytes).unwrap();
        let err = decode_user(user).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidFlatBuffer { element, .. } => assert_eq!(element, "Profile"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
