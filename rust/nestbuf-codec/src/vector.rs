//! Vector construction helpers.

use planus::{Builder, Offset};

/// Collects offsets of already written objects and lays them out as a
/// FlatBuffers vector.
///
/// Offsets are pushed in natural order and element `i` of the finished vector
/// refers to the `i`-th pushed offset. The builder itself grows back to front;
/// the placement needed for that is handled when the vector is finished.
///
/// Every object referenced by the vector must be written before [`finish`]
/// is called, since a vector cannot be interleaved with other writes.
///
/// [`finish`]: OffsetVector::finish
pub struct OffsetVector<T: ?Sized> {
    offsets: Vec<Offset<T>>,
}

impl<T: ?Sized> OffsetVector<T> {
    pub fn new() -> OffsetVector<T> {
        OffsetVector {
            offsets: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> OffsetVector<T> {
        OffsetVector {
            offsets: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, offset: Offset<T>) {
        self.offsets.push(offset);
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Writes the vector and returns its offset, or `None` if nothing was
    /// pushed. Empty collections are left out of the parent table entirely.
    pub fn finish(self, builder: &mut Builder) -> Option<Offset<[Offset<T>]>> {
        if self.offsets.is_empty() {
            return None;
        }
        Some(builder.create_vector::<Offset<T>>(self.offsets.as_slice()))
    }
}

impl<T: ?Sized> Default for OffsetVector<T> {
    fn default() -> Self {
        OffsetVector::new()
    }
}

impl<T: ?Sized> Extend<Offset<T>> for OffsetVector<T> {
    fn extend<I: IntoIterator<Item = Offset<T>>>(&mut self, iter: I) {
        self.offsets.extend(iter);
    }
}

/// Writes every string of `values` and then the vector that refers to them.
pub fn string_vector<S: AsRef<str>>(
    builder: &mut Builder,
    values: &[S],
) -> Option<Offset<[Offset<str>]>> {
    let mut offsets = OffsetVector::<str>::with_capacity(values.len());
    for value in values {
        offsets.push(builder.create_string(value.as_ref()));
    }
    offsets.finish(builder)
}

#[cfg(test)]
mod tests {
    use nestbuf_format::defs::user::{Link, Profile, ProfileRef, Settings, SettingsRef};
    use planus::{Builder, ReadAsRoot};

    use super::{OffsetVector, string_vector};

    fn read_features(bytes: &[u8]) -> Option<Vec<String>> {
        let settings = SettingsRef::read_as_root(bytes).unwrap();
        settings.features().unwrap().map(|features| {
            features
                .iter()
                .map(|s| s.unwrap().to_string())
                .collect()
        })
    }

    #[test]
    fn test_string_vector_preserves_order() {
        let mut builder = Builder::new();
        let features = string_vector(&mut builder, &["a", "b", "c"]);
        assert!(features.is_some());
        let root = Settings::create(&mut builder, (), (), features, ());
        let bytes = builder.finish(root, None).to_vec();
        assert_eq!(
            read_features(&bytes),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_empty_vector_is_omitted() {
        let mut builder = Builder::new();
        let features = string_vector::<&str>(&mut builder, &[]);
        assert!(features.is_none());
        let root = Settings::create(&mut builder, "en", (), features, ());
        let bytes = builder.finish(root, None).to_vec();
        assert_eq!(read_features(&bytes), None);
    }

    #[test]
    fn test_table_offsets_in_push_order() {
        let mut builder = Builder::new();
        let mut links = OffsetVector::new();
        assert!(links.is_empty());
        for platform in ["gh", "x", "li"] {
            let offset = Link::create(&mut builder, platform, ());
            links.push(offset);
        }
        assert_eq!(links.len(), 3);
        let links = links.finish(&mut builder);
        let root = Profile::create(&mut builder, (), (), (), (), links, ());
        let bytes = builder.finish(root, None).to_vec();

        let profile = ProfileRef::read_as_root(&bytes).unwrap();
        let platforms = profile
            .social_links()
            .unwrap()
            .unwrap()
            .iter()
            .map(|link| link.unwrap().platform().unwrap().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(platforms, ["gh", "x", "li"]);
    }
}
