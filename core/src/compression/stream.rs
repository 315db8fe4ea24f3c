//! compression/stream.rs
//! Read/copy helpers shared by the stream codecs.
use std::io::{self, ErrorKind, Read, Write};

use crate::compression::constants::{COPY_BUF_LEN, HEADER_PROBE_LEN};
use crate::compression::types::CompressionError;

/// Summary: Read up to `limit` bytes, retrying short reads until EOF.
/// - A single `read` may return fewer bytes than requested; this does not.
/// - The buffer grows with the data, so a huge `limit` does not preallocate.
pub fn stage_input(input: &mut dyn Read, limit: usize) -> io::Result<Vec<u8>> {
    let mut staged = Vec::with_capacity(limit.min(COPY_BUF_LEN));
    input.take(limit as u64).read_to_end(&mut staged)?;
    Ok(staged)
}

/// Read the leading bytes used to sniff a container format.
/// Returns fewer than `HEADER_PROBE_LEN` bytes only when the input is that short.
#[inline]
pub fn probe_header(input: &mut dyn Read) -> io::Result<Vec<u8>> {
    stage_input(input, HEADER_PROBE_LEN)
}

/// Write `head` and then everything left in `input` to `output`, unchanged.
pub fn copy_through(head: &[u8], input: &mut dyn Read, output: &mut dyn Write) -> io::Result<u64> {
    output.write_all(head)?;
    let copied = io::copy(input, output)?;
    output.flush()?;
    Ok(head.len() as u64 + copied)
}

/// Summary: Drain `decoder` into `output`.
/// - Read failures come from the decoder and surface as `Decode`.
/// - Write failures come from the sink and surface as `Io`.
pub fn copy_decoded<R: Read>(
    codec: &'static str,
    mut decoder: R,
    output: &mut dyn Write,
) -> Result<u64, CompressionError> {
    let mut buf = vec![0u8; COPY_BUF_LEN];
    let mut total = 0u64;
    loop {
        let n = match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(CompressionError::Decode { codec, source }),
        };
        output.write_all(&buf[..n])?;
        total += n as u64;
    }
    output.flush()?;
    Ok(total)
}
