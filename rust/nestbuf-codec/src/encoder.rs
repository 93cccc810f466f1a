//! Composite record encoder.
//!
//! FlatBuffers tables are built bottom-up: a table can only refer to objects
//! that already exist in the builder, and no other object may be written while
//! a table is open. Each encoder below therefore writes, in order, its map
//! entries, its vectors, its nested records and its own strings, and only then
//! creates its table.

use log::trace;
use nestbuf_format::defs::user as fb;
use planus::{Builder, Offset};

use crate::{
    leaf::{encode_limit, encode_link, encode_notification, encode_privacy},
    model::{Preferences, Profile, Settings, User},
    value::encode_entry,
    vector::{OffsetVector, string_vector},
};

/// Writes a complete user record and returns the offset of its table.
pub fn encode_user(builder: &mut Builder, user: &User) -> Offset<fb::User> {
    let mut metadata = OffsetVector::with_capacity(user.metadata.len());
    for (key, value) in &user.metadata {
        metadata.push(encode_entry(builder, key, value));
    }
    let metadata = metadata.finish(builder);
    let tags = string_vector(builder, &user.tags);

    let profile = encode_profile(builder, &user.profile);
    let settings = encode_settings(builder, &user.settings);

    let name = builder.create_string(user.name.as_str());
    let email = builder.create_string(user.email.as_str());

    let offset = fb::User::create(
        builder,
        user.id,
        name,
        email,
        user.age,
        user.is_active,
        profile,
        settings,
        tags,
        metadata,
        user.created_at,
    );
    trace!("encoded user {} ({} bytes written)", user.id, builder.len());
    offset
}

pub fn encode_profile(builder: &mut Builder, profile: &Profile) -> Offset<fb::Profile> {
    let mut links = OffsetVector::with_capacity(profile.social_links.len());
    for link in &profile.social_links {
        links.push(encode_link(builder, &link.platform, &link.url));
    }
    let links = links.finish(builder);

    let preferences = encode_preferences(builder, &profile.preferences);

    let first_name = builder.create_string(profile.first_name.as_str());
    let last_name = builder.create_string(profile.last_name.as_str());
    let bio = builder.create_string(profile.bio.as_str());
    let avatar = builder.create_string(profile.avatar.as_str());

    fb::Profile::create(
        builder,
        first_name,
        last_name,
        bio,
        avatar,
        links,
        preferences,
    )
}

pub fn encode_preferences(
    builder: &mut Builder,
    preferences: &Preferences,
) -> Offset<fb::Preferences> {
    let mut notifications = OffsetVector::with_capacity(preferences.notifications.len());
    for (key, value) in &preferences.notifications {
        notifications.push(encode_notification(builder, key, *value));
    }
    let notifications = notifications.finish(builder);

    let privacy = preferences.privacy;
    let privacy = encode_privacy(
        builder,
        privacy.profile_public,
        privacy.email_visible,
        privacy.show_activity,
    );

    let theme = builder.create_string(preferences.theme.as_str());
    let language = builder.create_string(preferences.language.as_str());

    fb::Preferences::create(builder, theme, language, notifications, privacy)
}

pub fn encode_settings(builder: &mut Builder, settings: &Settings) -> Offset<fb::Settings> {
    let mut limits = OffsetVector::with_capacity(settings.limits.len());
    for (key, value) in &settings.limits {
        limits.push(encode_limit(builder, key, *value));
    }
    let limits = limits.finish(builder);
    let features = string_vector(builder, &settings.features);

    let language = builder.create_string(settings.language.as_str());
    let timezone = builder.create_string(settings.timezone.as_str());

    fb::Settings::create(builder, language, timezone, features, limits)
}

#[cfg(test)]
mod tests {
    use nestbuf_format::defs::user::{PreferencesRef, SettingsRef, UserRef};
    use planus::{Builder, ReadAsRoot};

    use super::{encode_preferences, encode_settings, encode_user};
    use crate::model::{DynamicValue, Preferences, Settings, User};

    #[test]
    fn test_encode_user_fields() {
        let mut user = User {
            id: 1 << 40,
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
            is_active: true,
            created_at: 1_700_000_000_000_000_000,
            tags: vec!["x".to_string(), "y".to_string()],
            ..Default::default()
        };
        user.metadata.insert("k".to_string(), DynamicValue::from(1));

        let mut builder = Builder::new();
        let root = encode_user(&mut builder, &user);
        let bytes = builder.finish(root, None).to_vec();

        let user = UserRef::read_as_root(&bytes).unwrap();
        assert_eq!(user.id().unwrap(), 1 << 40);
        assert_eq!(user.name().unwrap(), Some("ada"));
        assert_eq!(user.email().unwrap(), Some("ada@example.com"));
        assert_eq!(user.age().unwrap(), 36);
        assert!(user.is_active().unwrap());
        assert_eq!(user.created_at().unwrap(), 1_700_000_000_000_000_000);
        assert_eq!(user.tags().unwrap().unwrap().len(), 2);
        assert_eq!(user.metadata().unwrap().unwrap().len(), 1);
        assert!(user.profile().unwrap().is_some());
        assert!(user.settings().unwrap().is_some());
    }

    #[test]
    fn test_empty_collections_are_not_written() {
        let mut builder = Builder::new();
        let root = encode_user(&mut builder, &User::default());
        let bytes = builder.finish(root, None).to_vec();

        let user = UserRef::read_as_root(&bytes).unwrap();
        assert!(user.tags().unwrap().is_none());
        assert!(user.metadata().unwrap().is_none());
        let profile = user.profile().unwrap().unwrap();
        assert!(profile.social_links().unwrap().is_none());
        let preferences = profile.preferences().unwrap().unwrap();
        assert!(preferences.notifications().unwrap().is_none());
        assert!(preferences.privacy().unwrap().is_some());
        let settings = user.settings().unwrap().unwrap();
        assert!(settings.features().unwrap().is_none());
        assert!(settings.limits().unwrap().is_none());
    }

    #[test]
    fn test_encode_preferences() {
        let mut preferences = Preferences {
            theme: "dark".to_string(),
            ..Default::default()
        };
        preferences.notifications.insert("email".to_string(), true);
        preferences.notifications.insert("sms".to_string(), false);
        preferences.privacy.email_visible = true;

        let mut builder = Builder::new();
        let root = encode_preferences(&mut builder, &preferences);
        let bytes = builder.finish(root, None).to_vec();

        let preferences = PreferencesRef::read_as_root(&bytes).unwrap();
        assert_eq!(preferences.theme().unwrap(), Some("dark"));
        assert_eq!(preferences.language().unwrap(), Some(""));
        let mut keys = preferences
            .notifications()
            .unwrap()
            .unwrap()
            .iter()
            .map(|n| n.unwrap().key().unwrap().unwrap().to_string())
            .collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, ["email", "sms"]);
        let privacy = preferences.privacy().unwrap().unwrap();
        assert!(privacy.email_visible().unwrap());
        assert!(!privacy.profile_public().unwrap());
    }

    #[test]
    fn test_encode_settings() {
        let mut settings = Settings {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            features: vec!["beta".to_string()],
            ..Default::default()
        };
        settings.limits.insert("max".to_string(), 10);

        let mut builder = Builder::new();
        let root = encode_settings(&mut builder, &settings);
        let bytes = builder.finish(root, None).to_vec();

        let settings = SettingsRef::read_as_root(&bytes).unwrap();
        assert_eq!(settings.timezone().unwrap(), Some("UTC"));
        let limits = settings.limits().unwrap().unwrap();
        assert_eq!(limits.len(), 1);
        let limit = limits.get(0).unwrap().unwrap();
        assert_eq!(limit.key().unwrap(), Some("max"));
        assert_eq!(limit.value().unwrap(), 10);
    }
}
