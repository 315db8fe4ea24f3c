//! bytekit-core
//!
//! Threshold-aware deflate and gzip stream codecs, plus factories that
//! resolve a codec capability to an instance.

#![forbid(unsafe_code)]

pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        CachingCodecFactory, CodecFactory, CompressionCodec, CompressionConfig, CompressionError,
        CompressionLevel, ConfigProvider, DeflateCodec, GzipCodec, StaticCodecFactory, StreamCodec,
    };
}
