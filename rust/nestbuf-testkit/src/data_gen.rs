//! Synthetic user record generation.
//!
//! All generators are driven by a seeded [`fastrand::Rng`], so a given seed
//! always produces the same records.

use nestbuf_codec::{
    DynamicValue, Link, Metadata, Preferences, PrivacySettings, Profile, Settings, User,
};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Donald", "Edsger", "Frances", "Grace", "John", "Ken", "Margaret",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Dijkstra", "Hamilton", "Hopper", "Knuth", "Liskov", "Lovelace", "McCarthy",
    "Thompson", "Turing",
];

const WORDS: &[&str] = &[
    "alpha", "beta", "cache", "delta", "engine", "flat", "graph", "heap", "index", "json",
    "kernel", "lambda", "merge", "node", "offset", "parser", "query", "record", "stream", "table",
];

const PLATFORMS: &[&str] = &["github", "gitlab", "linkedin", "mastodon", "x"];

const LANGUAGES: &[&str] = &["en", "de", "fr", "ja", "pt-BR", "uk"];

const TIMEZONES: &[&str] = &["UTC", "Europe/Berlin", "America/New_York", "Asia/Tokyo"];

const THEMES: &[&str] = &["light", "dark", "system"];

/// Creation timestamps are spread over roughly ten years from 2015-01-01.
const BASE_TIMESTAMP_NANOS: i64 = 1_420_070_400_000_000_000;
const TIMESTAMP_SPAN_NANOS: i64 = 315_360_000_000_000_000;

/// Generates `count` users with ids `1..=count`.
pub fn generate_users(count: usize, seed: u64) -> Vec<User> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (1..=count as i64)
        .map(|id| generate_user(&mut rng, id))
        .collect()
}

/// Generates one fully populated user.
///
/// Collections are occasionally left empty, so a batch of generated users
/// also covers the empty-collection encoding.
pub fn generate_user(rng: &mut fastrand::Rng, id: i64) -> User {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let login = format!("{}.{}{id}", first_name, last_name).to_lowercase();
    User {
        id,
        name: format!("{first_name} {last_name}"),
        email: format!("{login}@example.com"),
        age: rng.i32(18..90),
        is_active: rng.bool(),
        created_at: BASE_TIMESTAMP_NANOS + rng.i64(0..TIMESTAMP_SPAN_NANOS),
        tags: words(rng, 0..6),
        profile: generate_profile(rng, first_name, last_name, &login),
        settings: generate_settings(rng),
        metadata: generate_metadata(rng),
    }
}

fn generate_profile(rng: &mut fastrand::Rng, first_name: &str, last_name: &str, login: &str) -> Profile {
    let social_links = (0..rng.usize(0..4))
        .map(|_| {
            let platform = pick(rng, PLATFORMS);
            Link {
                platform: platform.to_string(),
                url: format!("https://{platform}.example.com/{login}"),
            }
        })
        .collect();
    Profile {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        bio: words(rng, 0..12).join(" "),
        avatar: format!("https://cdn.example.com/avatars/{login}.png"),
        social_links,
        preferences: Preferences {
            theme: pick(rng, THEMES).to_string(),
            language: pick(rng, LANGUAGES).to_string(),
            notifications: sample_keys(rng, &["email", "push", "sms", "digest"], |rng| {
                rng.bool()
            }),
            privacy: PrivacySettings {
                profile_public: rng.bool(),
                email_visible: rng.bool(),
                show_activity: rng.bool(),
            },
        },
    }
}

fn generate_settings(rng: &mut fastrand::Rng) -> Settings {
    Settings {
        language: pick(rng, LANGUAGES).to_string(),
        timezone: pick(rng, TIMEZONES).to_string(),
        features: words(rng, 0..5),
        limits: sample_keys(rng, &["max_items", "max_requests", "quota_mb"], |rng| {
            rng.i32(-1000..100_000)
        }),
    }
}

/// Generates a metadata map holding every kind of value.
pub fn generate_metadata(rng: &mut fastrand::Rng) -> Metadata {
    (0..rng.usize(0..8))
        .map(|i| {
            let value = match rng.u8(0..4) {
                0 => DynamicValue::String(words(rng, 1..4).join("-")),
                1 => DynamicValue::Int(rng.i32(..)),
                2 => DynamicValue::Bool(rng.bool()),
                _ => DynamicValue::Float(rng.f64() * 1e6 - 5e5),
            };
            (format!("{}_{i}", pick(rng, WORDS)), value)
        })
        .collect()
}

/// Keeps a random subset of `keys`, each with a freshly generated value.
fn sample_keys<V>(
    rng: &mut fastrand::Rng,
    keys: &[&str],
    mut value: impl FnMut(&mut fastrand::Rng) -> V,
) -> ahash::AHashMap<String, V> {
    let mut map = ahash::AHashMap::new();
    for key in keys {
        if rng.bool() {
            let v = value(rng);
            map.insert(key.to_string(), v);
        }
    }
    map
}

fn pick(rng: &mut fastrand::Rng, values: &[&'static str]) -> &'static str {
    values[rng.usize(..values.len())]
}

fn words(rng: &mut fastrand::Rng, count: std::ops::Range<usize>) -> Vec<String> {
    (0..rng.usize(count))
        .map(|_| pick(rng, WORDS).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::generate_users;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_users(20, 42);
        let b = generate_users(20, 42);
        assert_eq!(a, b);
        assert_ne!(a, generate_users(20, 43));
        assert_eq!(a.len(), 20);
        assert_eq!(a[0].id, 1);
        assert_eq!(a[19].id, 20);
    }

    #[test]
    fn test_generated_users_are_populated() {
        let users = generate_users(200, 7);
        assert!(users.iter().all(|u| !u.name.is_empty() && u.email.contains('@')));
        assert!(users.iter().any(|u| u.tags.is_empty()));
        assert!(users.iter().any(|u| !u.metadata.is_empty()));
        assert!(users.iter().any(|u| !u.profile.social_links.is_empty()));
        assert!(users.iter().all(|u| (18..90).contains(&u.age)));
    }
}
