//! In-memory user record model.
//!
//! The records own all of their data. Nothing here borrows an encoded buffer,
//! which is what the zero-copy `*Ref` accessors in `nestbuf_format` are for.

use ahash::AHashMap;
use nestbuf_format::ValueKind;
use serde::{Deserialize, Serialize};

/// Dynamically typed metadata attached to a user.
pub type Metadata = AHashMap<String, DynamicValue>;

/// Top-level user record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub is_active: bool,
    /// Creation time in Unix nanoseconds.
    pub created_at: i64,
    pub tags: Vec<String>,
    pub profile: Profile,
    pub settings: Settings,
    pub metadata: Metadata,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub avatar: String,
    pub social_links: Vec<Link>,
    pub preferences: Preferences,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub platform: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: String,
    pub language: String,
    pub notifications: AHashMap<String, bool>,
    pub privacy: PrivacySettings,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_public: bool,
    pub email_visible: bool,
    pub show_activity: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub language: String,
    pub timezone: String,
    pub features: Vec<String>,
    pub limits: AHashMap<String, i32>,
}

/// A metadata value: one of the four kinds the wire format can carry.
///
/// Serializes as the bare JSON scalar and deserializes through
/// [`DynamicValue::from_json`], so integers outside `i32` come back as text.
/// JSON has no NaN or infinity: such floats serialize as `null` and
/// deserialize as the string `"null"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "serde_json::Value")]
pub enum DynamicValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    String(String),
}

impl DynamicValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            DynamicValue::String(_) => ValueKind::String,
            DynamicValue::Int(_) => ValueKind::Int,
            DynamicValue::Bool(_) => ValueKind::Bool,
            DynamicValue::Float(_) => ValueKind::Float,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            DynamicValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            DynamicValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Converts an arbitrary JSON value into a metadata value.
    ///
    /// Strings, booleans, integers within `i32` range and floating point
    /// numbers map onto their own kind. Anything else (null, arrays, objects,
    /// integers that do not fit `i32`) is kept as its textual rendering, so the
    /// conversion never fails.
    pub fn from_json(value: serde_json::Value) -> DynamicValue {
        use serde_json::Value;

        match value {
            Value::String(s) => DynamicValue::String(s),
            Value::Bool(b) => DynamicValue::Bool(b),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    match i32::try_from(v) {
                        Ok(v) => DynamicValue::Int(v),
                        Err(_) => DynamicValue::String(n.to_string()),
                    }
                } else if n.is_u64() {
                    DynamicValue::String(n.to_string())
                } else {
                    n.as_f64()
                        .map(DynamicValue::Float)
                        .unwrap_or_else(|| DynamicValue::String(n.to_string()))
                }
            }
            other => DynamicValue::String(other.to_string()),
        }
    }
}

impl Default for DynamicValue {
    fn default() -> Self {
        DynamicValue::String(String::new())
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::String(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::String(value)
    }
}

impl From<i32> for DynamicValue {
    fn from(value: i32) -> Self {
        DynamicValue::Int(value)
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Bool(value)
    }
}

impl From<f32> for DynamicValue {
    fn from(value: f32) -> Self {
        DynamicValue::Float(value as f64)
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Float(value)
    }
}

impl From<serde_json::Value> for DynamicValue {
    fn from(value: serde_json::Value) -> Self {
        DynamicValue::from_json(value)
    }
}

impl std::fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DynamicValue::String(s) => f.write_str(s),
            DynamicValue::Int(v) => write!(f, "{v}"),
            DynamicValue::Bool(v) => write!(f, "{v}"),
            DynamicValue::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use nestbuf_format::ValueKind;
    use serde_json::json;

    use super::{DynamicValue, User};

    #[test]
    fn test_dynamic_value_kinds() {
        assert_eq!(DynamicValue::from("v1").kind(), ValueKind::String);
        assert_eq!(DynamicValue::from(42).kind(), ValueKind::Int);
        assert_eq!(DynamicValue::from(true).kind(), ValueKind::Bool);
        assert_eq!(DynamicValue::from(3.14).kind(), ValueKind::Float);
        assert_eq!(DynamicValue::from(1.5f32), DynamicValue::Float(1.5));
        assert_eq!(DynamicValue::default(), DynamicValue::String(String::new()));

        assert_eq!(DynamicValue::from(42).as_int(), Some(42));
        assert_eq!(DynamicValue::from(42).as_str(), None);
        assert_eq!(DynamicValue::from(false).as_bool(), Some(false));
        assert_eq!(DynamicValue::from(0.5).as_float(), Some(0.5));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(DynamicValue::from_json(json!("a")), DynamicValue::from("a"));
        assert_eq!(DynamicValue::from_json(json!(7)), DynamicValue::Int(7));
        assert_eq!(DynamicValue::from_json(json!(-7)), DynamicValue::Int(-7));
        assert_eq!(DynamicValue::from_json(json!(true)), DynamicValue::Bool(true));
        assert_eq!(DynamicValue::from_json(json!(2.5)), DynamicValue::Float(2.5));
    }

    #[test]
    fn test_from_json_text_fallback() {
        assert_eq!(DynamicValue::from_json(json!(null)), DynamicValue::from("null"));
        assert_eq!(DynamicValue::from_json(json!([1, 2])), DynamicValue::from("[1,2]"));
        assert_eq!(
            DynamicValue::from_json(json!({"a": 1})),
            DynamicValue::from("{\"a\":1}")
        );
        assert_eq!(
            DynamicValue::from_json(json!(5_000_000_000i64)),
            DynamicValue::from("5000000000")
        );
        assert_eq!(
            DynamicValue::from_json(json!(u64::MAX)),
            DynamicValue::String(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DynamicValue::from("x").to_string(), "x");
        assert_eq!(DynamicValue::from(-3).to_string(), "-3");
        assert_eq!(DynamicValue::from(true).to_string(), "true");
        assert_eq!(DynamicValue::from(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_user_serde() {
        let mut user = User {
            id: 1,
            name: "ada".to_string(),
            tags: vec!["x".to_string()],
            ..Default::default()
        };
        user.metadata.insert("k".to_string(), DynamicValue::from(3));
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_deserialize_matches_from_json() {
        let parse = |s: &str| serde_json::from_str::<DynamicValue>(s).unwrap();
        assert_eq!(parse("7"), DynamicValue::Int(7));
        assert_eq!(parse("2.5"), DynamicValue::Float(2.5));
        assert_eq!(parse("true"), DynamicValue::Bool(true));
        assert_eq!(parse("\"7\""), DynamicValue::from("7"));
        assert_eq!(parse("5000000000"), DynamicValue::from("5000000000"));
        assert_eq!(parse("null"), DynamicValue::from("null"));
        for text in ["5000000000", "-2147483649", "1e3", "[1,2]"] {
            let value: serde_json::Value = serde_json::from_str(text).unwrap();
            assert_eq!(parse(text), DynamicValue::from_json(value));
        }
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        let json = serde_json::to_string(&DynamicValue::Float(f64::NAN)).unwrap();
        assert_eq!(json, "null");
        assert_eq!(
            serde_json::from_str::<DynamicValue>(&json).unwrap(),
            DynamicValue::from("null")
        );
        let json = serde_json::to_string(&DynamicValue::Float(f64::INFINITY)).unwrap();
        assert_eq!(json, "null");
    }
}
