//! compression/types.rs
//! Codec identifiers, compression levels, errors and the `StreamCodec` trait.
use std::any::Any;
use std::fmt;
use std::io::{self, Read, Write};

use flate2::Compression;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::compression::constants::{codec_ids, deflate_header};
use crate::compression::config::CompressionConfig;

/// Codec capabilities a caller can ask a factory for.
///
/// `Any` names the abstract capability ("some codec") and is deliberately
/// left unmapped: asking a factory for it is a programming error.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionCodec {
    Any     = codec_ids::ANY,
    Deflate = codec_ids::DEFLATE,
    Gzip    = codec_ids::GZIP,
}

impl CompressionCodec {
    pub fn verify(raw: u16) -> Result<(), CodecError> {
        match raw {
            x if x == CompressionCodec::Any as u16     => Ok(()),
            x if x == CompressionCodec::Deflate as u16 => Ok(()),
            x if x == CompressionCodec::Gzip as u16    => Ok(()),
            _ => Err(CodecError::UnknownCompression { raw }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionCodec::Any     => "any",
            CompressionCodec::Deflate => "deflate",
            CompressionCodec::Gzip    => "gzip",
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Effort/ratio trade-off handed to the underlying encoder.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum CompressionLevel {
    NoCompression = 0,
    Fastest       = 1,
    Optimal       = 2,
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Fastest
    }
}

impl CompressionLevel {
    /// Second byte of the raw deflate header for this level.
    pub fn header_byte(self) -> u8 {
        match self {
            CompressionLevel::NoCompression => deflate_header::LEVEL_NONE,
            CompressionLevel::Optimal       => deflate_header::LEVEL_OPTIMAL,
            _                               => deflate_header::LEVEL_DEFAULT,
        }
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::NoCompression => Compression::none(),
            CompressionLevel::Fastest       => Compression::fast(),
            CompressionLevel::Optimal       => Compression::best(),
        }
    }
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

fn codec_label(codec_id: &u16) -> String {
    enum_name_or_hex::<CompressionCodec>(*codec_id)
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("unknown compression codec id: 0x{raw:04x}")]
    UnknownCompression { raw: u16 },
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    /// The capability has no concrete implementation (or is the abstract one).
    #[error("unsupported compression codec: {}", codec_label(.codec_id))]
    UnsupportedCodec { codec_id: u16 },

    #[error("codec {codec} failed to encode: {source}")]
    Encode {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    /// Input carried a valid signature but the payload did not decode.
    #[error("codec {codec} failed to decode: {source}")]
    Decode {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("invalid compression configuration: {0}")]
    InvalidConfig(String),

    #[error("stream i/o error: {0}")]
    Io(#[from] io::Error),
}

impl CompressionError {
    pub fn unsupported(codec: CompressionCodec) -> Self {
        CompressionError::UnsupportedCodec { codec_id: codec as u16 }
    }
}

/// A threshold-aware compressor for one container format.
///
/// Implementations hold only their immutable configuration, so a single
/// instance may be shared across threads as long as every call brings its
/// own reader and writer.
pub trait StreamCodec: Send + Sync + fmt::Debug {
    /// Which capability this codec implements.
    fn kind(&self) -> CompressionCodec;

    fn config(&self) -> &CompressionConfig;

    /// Compress everything readable from `input` into `output`.
    ///
    /// Inputs shorter than the configured minimum are copied verbatim.
    fn compress_stream(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), CompressionError>;

    /// Decompress `input` into `output`.
    ///
    /// Inputs that do not start with this codec's signature are copied verbatim.
    fn decompress_stream(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), CompressionError>;

    fn as_any(&self) -> &dyn Any;

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut reader = input;
        let mut out = Vec::with_capacity(input.len());
        self.compress_stream(&mut reader, &mut out)?;
        Ok(out)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut reader = input;
        let mut out = Vec::with_capacity(input.len());
        self.decompress_stream(&mut reader, &mut out)?;
        Ok(out)
    }
}
