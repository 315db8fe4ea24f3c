//! compression/registry.rs
//! Static capability-to-codec mapping and the plain factory built on it.

use std::sync::Arc;

use crate::compression::codecs::{DeflateCodec, GzipCodec};
use crate::compression::config::CompressionConfig;
use crate::compression::constants::{deflate_header, GZIP_SIGNATURE};
use crate::compression::types::{CompressionCodec, CompressionError, CompressionLevel, StreamCodec};

/// Builds a codec instance for one configuration.
pub type CodecConstructor = fn(CompressionConfig) -> Arc<dyn StreamCodec>;

pub struct CodecInfo {
    pub name: &'static str,
    /// Leading bytes the decompress probe expects.
    pub signature: [u8; 2],
    pub default_level: CompressionLevel,
}

fn new_deflate(config: CompressionConfig) -> Arc<dyn StreamCodec> {
    Arc::new(DeflateCodec::new(config))
}

fn new_gzip(config: CompressionConfig) -> Arc<dyn StreamCodec> {
    Arc::new(GzipCodec::new(config))
}

/// The one mapping from capability to implementation. `Any` stays unmapped.
pub fn constructor_for(codec: CompressionCodec) -> Option<CodecConstructor> {
    match codec {
        CompressionCodec::Deflate => Some(new_deflate as CodecConstructor),
        CompressionCodec::Gzip    => Some(new_gzip as CodecConstructor),
        CompressionCodec::Any     => None,
    }
}

pub fn resolve(codec: CompressionCodec) -> Result<CodecInfo, CompressionError> {
    match codec {
        CompressionCodec::Deflate => Ok(CodecInfo {
            name: "deflate",
            signature: [deflate_header::MAGIC, CompressionLevel::default().header_byte()],
            default_level: CompressionLevel::default(),
        }),
        CompressionCodec::Gzip => Ok(CodecInfo {
            name: "gzip",
            signature: GZIP_SIGNATURE,
            default_level: CompressionLevel::default(),
        }),
        other => Err(CompressionError::unsupported(other)),
    }
}

/// Resolves a capability to a codec instance.
pub trait CodecFactory: Send + Sync {
    /// Build (or fetch) the codec for `codec` configured with `config`.
    ///
    /// # Errors
    /// - `CompressionError::UnsupportedCodec` if the capability has no
    ///   implementation. This is a caller bug; retrying will not help.
    fn create(&self, codec: CompressionCodec, config: &CompressionConfig)
        -> Result<Arc<dyn StreamCodec>, CompressionError>;

    /// Resolve a raw wire id first, then create.
    fn create_from_id(&self, codec_id: u16, config: &CompressionConfig)
        -> Result<Arc<dyn StreamCodec>, CompressionError>
    {
        let codec = CompressionCodec::try_from(codec_id)
            .map_err(|_| CompressionError::UnsupportedCodec { codec_id })?;
        self.create(codec, config)
    }
}

/// Factory that builds a fresh codec on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCodecFactory;

impl StaticCodecFactory {
    pub fn new() -> Self {
        Self
    }
}

impl CodecFactory for StaticCodecFactory {
    fn create(&self, codec: CompressionCodec, config: &CompressionConfig)
        -> Result<Arc<dyn StreamCodec>, CompressionError>
    {
        match constructor_for(codec) {
            Some(build) => Ok(build(*config)),
            None => {
                log::warn!("no concrete codec is registered for capability '{}'", codec);
                Err(CompressionError::unsupported(codec))
            }
        }
    }
}
