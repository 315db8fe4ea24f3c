//! compression/config.rs
//! Immutable codec configuration and the providers that supply it.
use serde::{Deserialize, Serialize};

use crate::compression::constants::DEFAULT_MIN_SIZE_TO_COMPRESS;
use crate::compression::types::{CompressionError, CompressionLevel};

/// Threshold and effort settings shared by every stream codec.
///
/// Equality and hashing are by value, so a config can key the codec cache.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressionConfig {
    minimum_size_to_compress: usize,
    compression_level: CompressionLevel,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            minimum_size_to_compress: DEFAULT_MIN_SIZE_TO_COMPRESS,
            compression_level: CompressionLevel::Fastest,
        }
    }
}

impl CompressionConfig {
    pub fn new(minimum_size_to_compress: usize, compression_level: CompressionLevel) -> Self {
        Self { minimum_size_to_compress, compression_level }
    }

    /// Inputs strictly shorter than this are passed through uncompressed.
    pub fn minimum_size_to_compress(&self) -> usize {
        self.minimum_size_to_compress
    }

    pub fn compression_level(&self) -> CompressionLevel {
        self.compression_level
    }

    /// Parse a JSON options document, e.g.
    /// `{"minimumSizeToCompress": 512, "compressionLevel": "Optimal"}`.
    /// Missing fields keep their defaults.
    pub fn from_json(doc: &str) -> Result<Self, CompressionError> {
        serde_json::from_str(doc).map_err(|e| CompressionError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, CompressionError> {
        serde_json::to_string(self).map_err(|e| CompressionError::InvalidConfig(e.to_string()))
    }
}

/// Supplies a configuration to a codec at construction time.
///
/// `None` means "nothing configured"; codecs then fall back to the default.
pub trait ConfigProvider {
    fn compression_config(&self) -> Option<CompressionConfig>;

    fn config_or_default(&self) -> CompressionConfig {
        self.compression_config().unwrap_or_default()
    }
}

impl ConfigProvider for CompressionConfig {
    fn compression_config(&self) -> Option<CompressionConfig> {
        Some(*self)
    }
}

impl ConfigProvider for Option<CompressionConfig> {
    fn compression_config(&self) -> Option<CompressionConfig> {
        *self
    }
}

/// An options tree (for instance one section of an application settings
/// file). A missing or malformed section yields the default.
impl ConfigProvider for serde_json::Value {
    fn compression_config(&self) -> Option<CompressionConfig> {
        if self.is_null() {
            return None;
        }
        match CompressionConfig::deserialize(self) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                log::warn!("ignoring malformed compression options: {}", e);
                None
            }
        }
    }
}
