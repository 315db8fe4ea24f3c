#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use bytekit_core::compression::{
        CompressionConfig, CompressionLevel, GzipCodec, StreamCodec, GZIP_SIGNATURE,
    };

    const LOREM_210: &str =
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nulla porta ante vitae pretium cursus. Integer non velit vel nulla dictum mattis. Praesent aliquam bibendum ligula, id ultrices ante lobortis at posuere.";

    /// A reader that never yields more than one byte per call and cannot seek.
    struct OneByteReader<'a>(&'a [u8]);

    impl Read for OneByteReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn compress_below_minimum_returns_input() {
        let codec = GzipCodec::new(CompressionConfig::new(50, CompressionLevel::Fastest));
        let input: Vec<u8> = (0u8..26).collect();
        assert_eq!(codec.compress(&input).unwrap(), input);
    }

    #[test]
    fn compress_at_minimum_writes_member_header() {
        let codec = GzipCodec::new(CompressionConfig::new(200, CompressionLevel::Fastest));
        let input = LOREM_210.as_bytes()[..200].to_vec();
        let out = codec.compress(&input).unwrap();
        assert_eq!(out[0], 0x1F);
        assert_eq!(out[1], 0x8B);
        assert_eq!(codec.decompress(&out).unwrap(), input);
    }

    #[test]
    fn compress_above_default_minimum_round_trips() {
        let codec = GzipCodec::default();
        let out = codec.compress(LOREM_210.as_bytes()).unwrap();
        assert_eq!(&out[..2], &GZIP_SIGNATURE);
        assert_eq!(codec.decompress(&out).unwrap(), LOREM_210.as_bytes());
    }

    #[test]
    fn decompress_plain_input_returns_input() {
        let input: Vec<u8> = (1u8..=26).collect();
        assert_eq!(GzipCodec::default().decompress(&input).unwrap(), input);
    }

    #[test]
    fn decompress_known_vector_matches_deflate_text() {
        let gz = STANDARD.decode(include_str!("fixtures/gzip_lorem.b64").trim()).unwrap();
        let text = String::from_utf8(GzipCodec::default().decompress(&gz).unwrap()).unwrap();
        assert_eq!(text.len(), 2359);
        assert!(text.starts_with("\r\nLorem ipsum dolor sit amet"));
        assert!(text.ends_with("eget feugiat felis lacus mollis libero."));

        // Same document as the deflate vector, with CRLF line endings.
        let zl = STANDARD.decode(include_str!("fixtures/deflate_lorem.b64").trim()).unwrap();
        let other = bytekit_core::compression::DeflateCodec::default().decompress(&zl).unwrap();
        assert_eq!(text.replace("\r\n", "\n").into_bytes(), other);
    }

    #[test]
    fn round_trip_with_zero_minimum() {
        let codec = GzipCodec::new(CompressionConfig::new(0, CompressionLevel::Fastest));
        let expected = [10u8, 20, 30, 40, 50, 60, 70, 80, 90, 100, 1, 2, 3, 4, 5, 6].repeat(9);
        let compressed = codec.compress(&expected).unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap(), expected);
    }

    #[test]
    fn compress_empty_returns_empty() {
        assert!(GzipCodec::default().compress(&[]).unwrap().is_empty());
    }

    #[test]
    fn decompress_empty_returns_empty() {
        assert!(GzipCodec::default().decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn decompress_one_byte_returns_it() {
        assert_eq!(GzipCodec::default().decompress(&[0x1F]).unwrap(), vec![0x1F]);
    }

    #[test]
    fn trickling_reader_round_trips() {
        let codec = GzipCodec::new(CompressionConfig::new(32, CompressionLevel::Optimal));
        let input = LOREM_210.as_bytes().repeat(4);

        let mut compressed = Vec::new();
        codec.compress_stream(&mut OneByteReader(&input), &mut compressed).unwrap();
        assert_eq!(&compressed[..2], &GZIP_SIGNATURE);

        let mut restored = Vec::new();
        codec.decompress_stream(&mut OneByteReader(&compressed), &mut restored).unwrap();
        assert_eq!(restored, input);
    }

    #[test]
    fn trickling_reader_below_minimum_passes_through() {
        let codec = GzipCodec::new(CompressionConfig::new(32, CompressionLevel::Optimal));
        let input = [7u8; 31];
        let mut out = Vec::new();
        codec.compress_stream(&mut OneByteReader(&input), &mut out).unwrap();
        assert_eq!(out, input.to_vec());
    }
}
