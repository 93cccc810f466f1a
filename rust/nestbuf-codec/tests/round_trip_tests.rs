use ahash::AHashMap;
use nestbuf_codec::{
    DynamicValue, FlatBuffersSerializer, Link, Preferences, PrivacySettings, Profile, Serializer,
    Settings, User, UserIter, decode_collection, decode_single, encode_collection, encode_single,
};
use nestbuf_format::{defs::user::UserListRef, message::UserListMessage};
use nestbuf_testkit::data_gen::generate_users;
use planus::ReadAsRoot;

fn sample_user() -> User {
    let mut user = User {
        id: 42,
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        age: 85,
        is_active: true,
        created_at: 1_715_000_000_123_456_789,
        tags: vec!["x".to_string(), "y".to_string()],
        profile: Profile {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            bio: "COBOL".to_string(),
            avatar: "https://cdn.example.com/grace.png".to_string(),
            social_links: vec![],
            preferences: Preferences {
                theme: "dark".to_string(),
                language: "en".to_string(),
                notifications: AHashMap::from_iter([
                    ("email".to_string(), true),
                    ("sms".to_string(), false),
                ]),
                privacy: PrivacySettings {
                    profile_public: true,
                    email_visible: false,
                    show_activity: true,
                },
            },
        },
        settings: Settings {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            features: vec!["beta".to_string()],
            limits: AHashMap::from_iter([("max".to_string(), 10)]),
        },
        ..Default::default()
    };
    user.metadata.insert("k1".to_string(), DynamicValue::from("v1"));
    user.metadata.insert("k2".to_string(), DynamicValue::from(42));
    user.metadata.insert("k3".to_string(), DynamicValue::from(true));
    user.metadata.insert("k4".to_string(), DynamicValue::from(3.14));
    user
}

#[test]
fn test_sample_user_round_trip() {
    let user = sample_user();
    let bytes = encode_collection(std::slice::from_ref(&user)).unwrap();
    let decoded = decode_collection(&bytes).unwrap();
    assert_eq!(decoded.len(), 1);
    let decoded = &decoded[0];

    assert_eq!(decoded.tags, ["x", "y"]);
    assert!(decoded.profile.social_links.is_empty());
    assert_eq!(decoded.settings.limits.len(), 1);
    assert_eq!(decoded.settings.limits["max"], 10);
    assert_eq!(decoded.metadata.len(), 4);
    assert_eq!(decoded.metadata["k1"], DynamicValue::String("v1".to_string()));
    assert_eq!(decoded.metadata["k2"], DynamicValue::Int(42));
    assert_eq!(decoded.metadata["k3"], DynamicValue::Bool(true));
    assert_eq!(
        decoded.metadata["k4"].as_float().map(f64::to_bits),
        Some(3.14f64.to_bits())
    );
    assert_eq!(*decoded, user);
}

#[test]
fn test_every_field_survives() {
    let mut user = sample_user();
    user.id = i64::MIN;
    user.age = -1;
    user.created_at = i64::MAX;
    user.profile.social_links = vec![
        Link {
            platform: "github".to_string(),
            url: "https://github.com/grace".to_string(),
        },
        Link {
            platform: "x".to_string(),
            url: String::new(),
        },
    ];
    user.name = "Grâce 🚀".to_string();

    let bytes = encode_single(&user).unwrap();
    assert_eq!(decode_single(&bytes).unwrap(), user);
}

#[test]
fn test_absent_and_empty_collapse() {
    // The model cannot express "unset" nested records, and the codec does not
    // keep "absent" apart from "empty": both come back as empty collections.
    let user = User::default();
    let bytes = encode_single(&user).unwrap();
    let decoded = decode_single(&bytes).unwrap();
    assert_eq!(decoded, user);
    assert!(decoded.tags.is_empty());
    assert!(decoded.metadata.is_empty());
    assert!(decoded.profile.social_links.is_empty());
    assert!(decoded.profile.preferences.notifications.is_empty());
    assert_eq!(decoded.profile.preferences.privacy, PrivacySettings::default());
    assert!(decoded.settings.features.is_empty());
    assert!(decoded.settings.limits.is_empty());

    let message = UserListMessage::new(bytes).unwrap();
    let wire = message.user_at(0).unwrap();
    assert!(wire.tags().unwrap().is_none());
    assert!(wire.metadata().unwrap().is_none());
    assert!(wire.profile().unwrap().is_some());
}

#[test]
fn test_map_insertion_order_is_irrelevant() {
    let mut a = sample_user();
    let mut b = sample_user();
    a.metadata.clear();
    b.metadata.clear();
    for i in 0..50 {
        a.metadata.insert(format!("key{i}"), DynamicValue::from(i));
    }
    for i in (0..50).rev() {
        b.metadata.insert(format!("key{i}"), DynamicValue::from(i));
    }
    let a = decode_single(&encode_single(&a).unwrap()).unwrap();
    let b = decode_single(&encode_single(&b).unwrap()).unwrap();
    assert_eq!(a.metadata, b.metadata);
    assert_eq!(a, b);
}

#[test]
fn test_vector_order_preserved() {
    let mut user = sample_user();
    user.tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    user.settings.features = vec!["c".to_string(), "b".to_string(), "a".to_string()];
    let decoded = decode_single(&encode_single(&user).unwrap()).unwrap();
    assert_eq!(decoded.tags, ["a", "b", "c"]);
    assert_eq!(decoded.settings.features, ["c", "b", "a"]);
}

#[test]
fn test_duplicate_strings_are_independent() {
    let mut user = sample_user();
    user.tags = vec!["same".to_string(); 3];
    user.settings.features = vec!["same".to_string()];
    user.metadata
        .insert("same".to_string(), DynamicValue::from("same"));
    let decoded = decode_single(&encode_single(&user).unwrap()).unwrap();
    assert_eq!(decoded, user);
}

#[test]
fn test_empty_collection() {
    let bytes = encode_collection(&[]).unwrap();
    assert!(decode_collection(&bytes).unwrap().is_empty());
    let list = UserListRef::read_as_root(&bytes).unwrap();
    assert_eq!(list.user_count().unwrap(), 0);
    assert!(decode_single(&bytes).is_err());
}

#[test]
fn test_large_collection() {
    let users = generate_users(1000, 2985745485);
    let bytes = encode_collection(&users).unwrap();
    let decoded = decode_collection(&bytes).unwrap();
    assert_eq!(decoded.len(), 1000);
    assert_eq!(decoded, users);

    let ids = UserIter::new(&bytes)
        .unwrap()
        .map(|user| user.unwrap().id)
        .collect::<Vec<_>>();
    assert_eq!(ids, (1..=1000).collect::<Vec<i64>>());
}

#[test]
fn test_truncated_buffer_fails() {
    let users = generate_users(10, 11);
    let bytes = encode_collection(&users).unwrap();
    for len in [0, 3, bytes.len() / 2] {
        let truncated = &bytes[..len];
        assert!(
            decode_collection(truncated).is_err(),
            "truncated to {len} bytes"
        );
    }
}

#[test]
fn test_serializer_matches_free_functions() {
    let serializer = FlatBuffersSerializer::new();
    let users = generate_users(25, 5);
    let bytes = serializer.marshal_users(&users).unwrap();
    assert_eq!(bytes, encode_collection(&users).unwrap());
    assert_eq!(serializer.unmarshal_users(&bytes).unwrap(), users);
    assert_eq!(serializer.unmarshal(&bytes).unwrap(), users[0]);
}
