//! Encoder configuration.

use nestbuf_common::{Result, verify_arg};
use nestbuf_format::MAX_FLATBUFFER_SIZE;
use serde::{Deserialize, Serialize};

/// Builder capacity reserved for a single record.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Builder capacity reserved per record when encoding a collection.
pub const DEFAULT_CAPACITY_PER_RECORD: usize = 1024;

/// Configuration of the FlatBuffers user codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Initial builder capacity in bytes when encoding one record.
    pub initial_capacity: usize,
    /// Initial builder capacity in bytes per record when encoding a collection.
    pub capacity_per_record: usize,
    /// Largest finished buffer the encoder will hand out.
    pub max_buffer_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            capacity_per_record: DEFAULT_CAPACITY_PER_RECORD,
            max_buffer_size: MAX_FLATBUFFER_SIZE,
        }
    }
}

impl CodecConfig {
    pub fn with_initial_capacity(&self, initial_capacity: usize) -> CodecConfig {
        CodecConfig {
            initial_capacity,
            ..self.clone()
        }
    }

    pub fn with_capacity_per_record(&self, capacity_per_record: usize) -> CodecConfig {
        CodecConfig {
            capacity_per_record,
            ..self.clone()
        }
    }

    pub fn with_max_buffer_size(&self, max_buffer_size: usize) -> CodecConfig {
        CodecConfig {
            max_buffer_size,
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// The buffer limit must be non-zero and cannot exceed what a 32-bit
    /// FlatBuffers offset can address.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(max_buffer_size, self.max_buffer_size > 0);
        verify_arg!(
            max_buffer_size,
            self.max_buffer_size <= MAX_FLATBUFFER_SIZE
        );
        Ok(())
    }

    /// Builder capacity to reserve for a collection of `count` records.
    ///
    /// Clamped to the buffer limit so that a large count never turns into an
    /// oversized up-front allocation.
    pub fn collection_capacity(&self, count: usize) -> usize {
        self.capacity_per_record
            .saturating_mul(count)
            .max(self.initial_capacity)
            .min(self.max_buffer_size)
    }
}

#[cfg(test)]
mod tests {
    use nestbuf_common::error::ErrorKind;

    use super::CodecConfig;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.initial_capacity, 1024);
        assert_eq!(config.capacity_per_record, 1024);
        assert_eq!(config.max_buffer_size, i32::MAX as usize);
        config.validate().unwrap();
    }

    #[test]
    fn test_config_validation() {
        let err = CodecConfig::default()
            .with_max_buffer_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));

        let err = CodecConfig::default()
            .with_max_buffer_size(u32::MAX as usize)
            .validate()
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));

        CodecConfig::default()
            .with_initial_capacity(0)
            .with_capacity_per_record(0)
            .validate()
            .unwrap();
    }

    #[test]
    fn test_collection_capacity() {
        let config = CodecConfig::default();
        assert_eq!(config.collection_capacity(0), 1024);
        assert_eq!(config.collection_capacity(10), 10 * 1024);
        let small = config.with_max_buffer_size(4096);
        assert_eq!(small.collection_capacity(1000), 4096);
        assert_eq!(config.collection_capacity(usize::MAX), i32::MAX as usize);
    }

    #[test]
    fn test_config_serde() {
        let config: CodecConfig =
            serde_json::from_str(r#"{ "capacity_per_record": 256 }"#).unwrap();
        assert_eq!(config.capacity_per_record, 256);
        assert_eq!(config.initial_capacity, 1024);
    }
}
