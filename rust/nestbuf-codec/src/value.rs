//! Tagged metadata value codec.
//!
//! A metadata entry on the wire is a table with a `value_type` discriminant
//! and one slot per kind. Exactly the slot named by the discriminant is
//! written; the others stay at their defaults and take no space.

use log::warn;
use nestbuf_common::{Result, error::Error};
use nestbuf_format::{
    ValueKind,
    defs::user::{self as fb, MetadataEntryRef},
};
use planus::{Builder, DefaultValue, Offset};

use crate::{decoder::owned_str, model::DynamicValue};

/// Writes a double unless it is bitwise identical to the default.
///
/// The stock scalar writer compares by value, which would drop `-0.0` as equal
/// to the `0.0` default.
struct BitExact(f64);

impl planus::WriteAsDefault<f64, f64> for BitExact {
    type Prepared = f64;

    #[inline]
    fn prepare(&self, _builder: &mut Builder, default: &f64) -> Option<f64> {
        (self.0.to_bits() != default.to_bits()).then_some(self.0)
    }
}

/// Encodes one `key -> value` pair as a `MetadataEntry` table.
///
/// The key string, and for string values the value string, are written before
/// the entry table is started.
pub fn encode_entry(
    builder: &mut Builder,
    key: &str,
    value: &DynamicValue,
) -> Offset<fb::MetadataEntry> {
    let key = builder.create_string(key);
    let tag = value.kind().tag();
    match value {
        DynamicValue::String(s) => {
            let s = builder.create_string(s.as_str());
            fb::MetadataEntry::create(builder, key, tag, s, DefaultValue, DefaultValue, DefaultValue)
        }
        DynamicValue::Int(v) => {
            fb::MetadataEntry::create(builder, key, tag, (), *v, DefaultValue, DefaultValue)
        }
        DynamicValue::Bool(v) => {
            fb::MetadataEntry::create(builder, key, tag, (), DefaultValue, *v, DefaultValue)
        }
        DynamicValue::Float(v) => fb::MetadataEntry::create(
            builder,
            key,
            tag,
            (),
            DefaultValue,
            DefaultValue,
            BitExact(*v),
        ),
    }
}

/// Decodes the value of a metadata entry from the slot named by its
/// discriminant.
///
/// Entries written by a newer producer may carry a discriminant this reader
/// does not know; those are read from the string slot.
pub fn decode_value(entry: MetadataEntryRef<'_>) -> Result<DynamicValue> {
    read_value(entry).map_err(|e| Error::flatbuffer("MetadataEntry", e))
}

fn read_value(entry: MetadataEntryRef<'_>) -> planus::Result<DynamicValue> {
    let tag = entry.value_type()?;
    let value = match ValueKind::from_tag(tag) {
        Some(ValueKind::String) => DynamicValue::String(owned_str(entry.string_value()?)),
        Some(ValueKind::Int) => DynamicValue::Int(entry.int_value()?),
        Some(ValueKind::Bool) => DynamicValue::Bool(entry.bool_value()?),
        Some(ValueKind::Float) => DynamicValue::Float(entry.float_value()?),
        None => {
            warn!("metadata entry has unknown value type {tag}, reading it as a string");
            DynamicValue::String(owned_str(entry.string_value()?))
        }
    };
    Ok(value)
}

/// Decodes a metadata entry into its owned key and value.
pub fn decode_entry(entry: MetadataEntryRef<'_>) -> Result<(String, DynamicValue)> {
    let key = entry
        .key()
        .map_err(|e| Error::flatbuffer("MetadataEntry", e))?;
    let key = owned_str(key);
    let value = decode_value(entry)?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use nestbuf_format::{
        ValueKind,
        defs::user::{MetadataEntry, MetadataEntryRef},
    };
    use planus::{Builder, ReadAsRoot};

    use super::{decode_entry, decode_value, encode_entry};
    use crate::model::DynamicValue;

    fn encode(key: &str, value: &DynamicValue) -> Vec<u8> {
        let mut builder = Builder::new();
        let entry = encode_entry(&mut builder, key, value);
        builder.finish(entry, None).to_vec()
    }

    #[test]
    fn test_every_kind_round_trips() {
        let values = [
            DynamicValue::from("v1"),
            DynamicValue::from(""),
            DynamicValue::from(42),
            DynamicValue::from(i32::MIN),
            DynamicValue::from(0),
            DynamicValue::from(true),
            DynamicValue::from(false),
            DynamicValue::from(3.14),
            DynamicValue::from(0.0),
            DynamicValue::from(f64::MAX),
            DynamicValue::from(f64::MIN_POSITIVE),
        ];
        for value in values {
            let bytes = encode("k", &value);
            let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
            assert_eq!(entry.value_kind().unwrap(), Some(value.kind()));
            let (key, decoded) = decode_entry(entry).unwrap();
            assert_eq!(key, "k");
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn test_float_bits_preserved() {
        for v in [-0.0f64, 3.14, 1e-310, f64::NAN, f64::NEG_INFINITY] {
            let bytes = encode("f", &DynamicValue::Float(v));
            let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
            match decode_value(entry).unwrap() {
                DynamicValue::Float(decoded) => assert_eq!(decoded.to_bits(), v.to_bits()),
                other => panic!("unexpected value {other:?}"),
            }
        }
    }

    #[test]
    fn test_only_matching_slot_is_written() {
        let bytes = encode("n", &DynamicValue::Int(7));
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(entry.string_value().unwrap(), None);
        assert!(!entry.bool_value().unwrap());
        assert_eq!(entry.float_value().unwrap(), 0.0);

        let bytes = encode("s", &DynamicValue::from("42"));
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(entry.int_value().unwrap(), 0);
        assert_eq!(decode_value(entry).unwrap(), DynamicValue::from("42"));
    }

    #[test]
    fn test_discriminant_selects_slot() {
        // A producer that fills several slots is still read through the tag.
        let entry = MetadataEntry {
            key: Some("mixed".to_string()),
            value_type: ValueKind::Bool.tag(),
            string_value: Some("no".to_string()),
            int_value: 5,
            bool_value: true,
            float_value: 1.0,
        };
        let bytes = Builder::new().finish(&entry, None).to_vec();
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(decode_value(entry).unwrap(), DynamicValue::Bool(true));
    }

    #[test]
    fn test_unknown_tag_reads_string_slot() {
        let entry = MetadataEntry {
            key: Some("future".to_string()),
            value_type: 17,
            string_value: Some("fallback".to_string()),
            int_value: 5,
            ..Default::default()
        };
        let bytes = Builder::new().finish(&entry, None).to_vec();
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(
            decode_entry(entry).unwrap(),
            ("future".to_string(), DynamicValue::from("fallback"))
        );

        let entry = MetadataEntry {
            value_type: 200,
            ..Default::default()
        };
        let bytes = Builder::new().finish(&entry, None).to_vec();
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(
            decode_entry(entry).unwrap(),
            (String::new(), DynamicValue::from(""))
        );
    }

    #[test]
    fn test_string_tag_with_unset_slot() {
        let entry = MetadataEntry {
            key: Some("k".to_string()),
            value_type: ValueKind::String.tag(),
            string_value: None,
            ..Default::default()
        };
        let bytes = Builder::new().finish(&entry, None).to_vec();
        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        assert_eq!(entry.string_value().unwrap(), None);
        assert_eq!(
            decode_value(entry).unwrap(),
            DynamicValue::String(String::new())
        );
        assert_eq!(
            decode_entry(entry).unwrap(),
            ("k".to_string(), DynamicValue::String(String::new()))
        );
    }

    #[test]
    fn test_corrupted_string_slot_names_entry() {
        let mut bytes = encode("k", &DynamicValue::from("payload"));
        let at = bytes.windows(7).position(|w| w == b"payload").unwrap() - 4;
        bytes[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());

        let entry = MetadataEntryRef::read_as_root(&bytes).unwrap();
        let err = decode_value(entry).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(
            err.to_string()
                .starts_with("invalid FlatBuffers format for 'MetadataEntry'")
        );
    }
}
