//! Encoders and decoders for the records that have no nested children.

use nestbuf_common::{Result, error::Error};
use nestbuf_format::defs::user::{
    self as fb, LimitSettingRef, LinkRef, NotificationSettingRef, PrivacySettingsRef,
};
use planus::{Builder, Offset};

use crate::{
    decoder::owned_str,
    model::{Link, PrivacySettings},
};

/// Writes a `Link` table. Both strings are written before the table.
pub fn encode_link(builder: &mut Builder, platform: &str, url: &str) -> Offset<fb::Link> {
    let platform = builder.create_string(platform);
    let url = builder.create_string(url);
    fb::Link::create(builder, platform, url)
}

pub fn encode_privacy(
    builder: &mut Builder,
    profile_public: bool,
    email_visible: bool,
    show_activity: bool,
) -> Offset<fb::PrivacySettings> {
    fb::PrivacySettings::create(builder, profile_public, email_visible, show_activity)
}

/// Writes one entry of the notifications map.
pub fn encode_notification(
    builder: &mut Builder,
    key: &str,
    value: bool,
) -> Offset<fb::NotificationSetting> {
    let key = builder.create_string(key);
    fb::NotificationSetting::create(builder, key, value)
}

/// Writes one entry of the limits map.
pub fn encode_limit(builder: &mut Builder, key: &str, value: i32) -> Offset<fb::LimitSetting> {
    let key = builder.create_string(key);
    fb::LimitSetting::create(builder, key, value)
}

pub fn decode_link(link: LinkRef<'_>) -> Result<Link> {
    let read = || -> planus::Result<Link> {
        Ok(Link {
            platform: owned_str(link.platform()?),
            url: owned_str(link.url()?),
        })
    };
    read().map_err(|e| Error::flatbuffer("Link", e))
}

pub fn decode_privacy(privacy: PrivacySettingsRef<'_>) -> Result<PrivacySettings> {
    let read = || -> planus::Result<PrivacySettings> {
        Ok(PrivacySettings {
            profile_public: privacy.profile_public()?,
            email_visible: privacy.email_visible()?,
            show_activity: privacy.show_activity()?,
        })
    };
    read().map_err(|e| Error::flatbuffer("PrivacySettings", e))
}

pub fn decode_notification(entry: NotificationSettingRef<'_>) -> Result<(String, bool)> {
    let read = || -> planus::Result<(String, bool)> {
        Ok((owned_str(entry.key()?), entry.value()?))
    };
    read().map_err(|e| Error::flatbuffer("NotificationSetting", e))
}

pub fn decode_limit(entry: LimitSettingRef<'_>) -> Result<(String, i32)> {
    let read = || -> planus::Result<(String, i32)> {
        Ok((owned_str(entry.key()?), entry.value()?))
    };
    read().map_err(|e| Error::flatbuffer("LimitSetting", e))
}

#[cfg(test)]
mod tests {
    use nestbuf_format::defs::user::{
        LimitSettingRef, LinkRef, NotificationSettingRef, PrivacySettingsRef,
    };
    use planus::{Builder, ReadAsRoot};

    use super::*;

    #[test]
    fn test_link() {
        let mut builder = Builder::new();
        let link = encode_link(&mut builder, "github", "https://github.com/ada");
        let bytes = builder.finish(link, None).to_vec();
        let link = decode_link(LinkRef::read_as_root(&bytes).unwrap()).unwrap();
        assert_eq!(
            link,
            Link {
                platform: "github".to_string(),
                url: "https://github.com/ada".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_link() {
        let mut builder = Builder::new();
        let link = encode_link(&mut builder, "", "");
        let bytes = builder.finish(link, None).to_vec();
        let link = decode_link(LinkRef::read_as_root(&bytes).unwrap()).unwrap();
        assert_eq!(link, Link::default());
    }

    #[test]
    fn test_privacy() {
        for bits in 0u8..8 {
            let expected = PrivacySettings {
                profile_public: bits & 1 != 0,
                email_visible: bits & 2 != 0,
                show_activity: bits & 4 != 0,
            };
            let mut builder = Builder::new();
            let privacy = encode_privacy(
                &mut builder,
                expected.profile_public,
                expected.email_visible,
                expected.show_activity,
            );
            let bytes = builder.finish(privacy, None).to_vec();
            let privacy = PrivacySettingsRef::read_as_root(&bytes).unwrap();
            assert_eq!(decode_privacy(privacy).unwrap(), expected);
        }
    }

    #[test]
    fn test_map_entries() {
        let mut builder = Builder::new();
        let entry = encode_notification(&mut builder, "email", true);
        let bytes = builder.finish(entry, None).to_vec();
        let entry = NotificationSettingRef::read_as_root(&bytes).unwrap();
        assert_eq!(decode_notification(entry).unwrap(), ("email".to_string(), true));

        let mut builder = Builder::new();
        let entry = encode_limit(&mut builder, "max", -10);
        let bytes = builder.finish(entry, None).to_vec();
        let entry = LimitSettingRef::read_as_root(&bytes).unwrap();
        assert_eq!(decode_limit(entry).unwrap(), ("max".to_string(), -10));
    }

    #[test]
    fn test_corrupted_link_names_table() {
        let mut builder = Builder::new();
        let link = encode_link(&mut builder, "github", "https://example.com/ada");
        let mut bytes = builder.finish(link, None).to_vec();
        let at = bytes.windows(6).position(|w| w == b"github").unwrap() - 4;
        bytes[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());

        let err = decode_link(LinkRef::read_as_root(&bytes).unwrap()).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(
            err.to_string()
                .starts_with("invalid FlatBuffers format for 'Link'")
        );
    }
}
