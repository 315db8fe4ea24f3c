//! compression/mod.rs
//! Threshold-aware deflate and gzip stream codecs.
//!
//! Notes:
//! - Payloads shorter than the configured minimum are emitted verbatim, with no header.
//! - Decompression sniffs the leading two bytes; input without the expected
//!   signature is treated as uncompressed and copied through unchanged.
//! - Factories resolve a `CompressionCodec` capability to a concrete codec;
//!   `CachingCodecFactory` shares instances per configuration.

pub mod cache;
pub mod codecs;
pub mod config;
pub mod constants;
pub mod registry;
pub mod stream;
pub mod types;

pub use cache::*;
pub use codecs::{DeflateCodec, GzipCodec};
pub use config::*;
pub use constants::*;
pub use registry::*;
pub use types::*;
