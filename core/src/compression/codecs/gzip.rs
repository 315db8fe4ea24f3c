//! Gzip (RFC 1952) via flate2. The encoder writes its own member header.

use std::any::Any;
use std::io::{Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::compression::codecs::below_threshold;
use crate::compression::config::{CompressionConfig, ConfigProvider};
use crate::compression::constants::GZIP_SIGNATURE;
use crate::compression::stream::{copy_decoded, copy_through, probe_header, stage_input};
use crate::compression::types::{CompressionCodec, CompressionError, StreamCodec};

const CODEC: &str = "gzip";

#[derive(Debug, Clone, Default)]
pub struct GzipCodec {
    config: CompressionConfig,
}

impl GzipCodec {
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.config_or_default())
    }

    pub fn is_signature(probe: &[u8]) -> bool {
        probe.len() >= 2 && probe[..2] == GZIP_SIGNATURE
    }

    fn encode(&self, staged: &[u8], input: &mut dyn Read, output: &mut dyn Write) -> std::io::Result<()> {
        let mut enc = GzEncoder::new(output, self.config.compression_level().into());
        enc.write_all(staged)?;
        std::io::copy(input, &mut enc)?;
        enc.finish()?.flush()
    }
}

impl StreamCodec for GzipCodec {
    fn kind(&self) -> CompressionCodec {
        CompressionCodec::Gzip
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
            log::debug!("{}: no member signature in input, passing through", CODEC);
            copy_through(&probe, input, output)?;
            return Ok(());
        }

        // The decoder parses the member header itself, so replay the probe.
        let replayed = probe.as_slice().chain(input);
        copy_decoded(CODEC, MultiGzDecoder::new(replayed), output)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
