//! Raw deflate via flate2, framed by a two-byte `0x78 <level>` header.
//!
//! The header mirrors the zlib CMF/FLG pair so zlib-aware readers recognise
//! the stream, but no adler32 trailer is written: the payload after the
//! header is a bare deflate bitstream.

use std::any::Any;
use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

use crate::compression::config::{CompressionConfig, ConfigProvider};
use crate::compression::constants::deflate_header;
use crate::compression::stream::{copy_decoded, copy_through, probe_header, stage_input};
use crate::compression::types::{CompressionCodec, CompressionError, StreamCodec};
use crate::compression::codecs::below_threshold;

const CODEC: &str = "deflate";

#[derive(Debug, Clone, Default)]
pub struct DeflateCodec {
    config: CompressionConfig,
}

impl DeflateCodec {
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.config_or_default())
    }

    /// True when `probe` carries the header this codec writes.
    pub fn is_signature(probe: &[u8]) -> bool {
        probe.len() >= 2
            && probe[0] == deflate_header::MAGIC
            && deflate_header::LEVELS.contains(&probe[1])
    }

    fn encode(&self, staged: &[u8], input: &mut dyn Read, output: &mut dyn Write) -> std::io::Result<()> {
        let level = self.config.compression_level();
        output.write_all(&[deflate_header::MAGIC, level.header_byte()])?;

        let mut enc = DeflateEncoder::new(output, level.into());
        enc.write_all(staged)?;
        std::io::copy(input, &mut enc)?;
        enc.finish()?.flush()
    }
}

impl StreamCodec for DeflateCodec {
    fn kind(&self) -> CompressionCodec {
        CompressionCodec::Deflate
    }

    fn config(&self) -> &CompressionConfig {
        &self.config
    }

    fn compress_stream(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), CompressionError> {
        let threshold = self.config.minimum_size_to_compress();
        let staged = stage_input(input, threshold.max(1))?;
        if below_threshold(&staged, threshold) {
            log::debug!("{}: {} byte(s) below threshold {}, passing through", CODEC, staged.len(), threshold);
            output.write_all(&staged)?;
            output.flush()?;
            return Ok(());
        }

        self.encode(&staged, input, output)
            .map_err(|source| CompressionError::Encode { codec: CODEC, source })
    }

    fn decompress_stream(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), CompressionError> {
        let probe = probe_header(input)?;
        if !Self::is_signature(&probe) {
            log::debug!("{}: no header in input, passing through", CODEC);
            copy_through(&probe, input, output)?;
            return Ok(());
        }

        // Header consumed; the decoder only sees the deflate bitstream.
        copy_decoded(CODEC, DeflateDecoder::new(input), output)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::types::CompressionLevel;

    fn sentence() -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog. ".repeat(8)
    }

    #[test]
    fn header_byte_tracks_level() {
        let data = sentence();
        for (level, byte) in [
            (CompressionLevel::NoCompression, 0x01),
            (CompressionLevel::Fastest, 0x9C),
            (CompressionLevel::Optimal, 0xDA),
        ] {
            let codec = DeflateCodec::new(CompressionConfig::new(10, level));
            let out = codec.compress(&data).unwrap();
            assert_eq!(&out[..2], &[0x78, byte]);
            assert_eq!(codec.decompress(&out).unwrap(), data);
        }
    }

    #[test]
    fn signature_requires_known_level_byte() {
        assert!(DeflateCodec::is_signature(&[0x78, 0xDA]));
        assert!(!DeflateCodec::is_signature(&[0x78, 0x5E]));
        assert!(!DeflateCodec::is_signature(&[0x78]));
    }

    #[test]
    fn zero_threshold_empty_input_emits_nothing() {
        let codec = DeflateCodec::new(CompressionConfig::new(0, CompressionLevel::Fastest));
        assert!(codec.compress(&[]).unwrap().is_empty());
    }

    #[test]
    fn zero_threshold_single_byte_is_compressed() {
        let codec = DeflateCodec::new(CompressionConfig::new(0, CompressionLevel::Fastest));
        let out = codec.compress(&[42]).unwrap();
        assert_eq!(&out[..2], &[0x78, 0x9C]);
        assert_eq!(codec.decompress(&out).unwrap(), vec![42]);
    }

    #[test]
    fn corrupt_body_after_header_is_a_decode_error() {
        let codec = DeflateCodec::default();
        let err = codec.decompress(&[0x78, 0x9C, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap_err();
        assert!(matches!(err, CompressionError::Decode { codec: "deflate", .. }));
    }
}
