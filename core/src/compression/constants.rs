/// Stable codec IDs (u16) for configuration and wire use.
pub mod codec_ids {
    /// The abstract capability. Never mapped to an implementation.
    pub const ANY: u16     = 0x0000;
    pub const DEFLATE: u16 = 0x0001;
    pub const GZIP: u16    = 0x0002;
}

/// Leading bytes written ahead of a raw deflate bitstream.
pub mod deflate_header {
    pub const MAGIC: u8 = 0x78;
    pub const LEVEL_NONE: u8 = 0x01;
    pub const LEVEL_DEFAULT: u8 = 0x9C;
    pub const LEVEL_OPTIMAL: u8 = 0xDA;

    /// Level bytes accepted by the decompress probe.
    pub const LEVELS: &[u8] = &[LEVEL_NONE, LEVEL_DEFAULT, LEVEL_OPTIMAL];
}

/// RFC 1952 member signature (ID1, ID2).
pub const GZIP_SIGNATURE: [u8; 2] = [0x1F, 0x8B];

/// Bytes read from the head of a stream to sniff its format.
pub const HEADER_PROBE_LEN: usize = 2;

/// Payloads shorter than this are passed through unless configured otherwise.
pub const DEFAULT_MIN_SIZE_TO_COMPRESS: usize = 200;

/// Working buffer used when draining decoders.
pub const COPY_BUF_LEN: usize = 8 * 1024;
