use crate::error::{Container, DecodeError, DecodeResult};
use flate2::read::GzDecoder;
use log::debug;
use std::io::Read;

/// Gzip member header magic, per RFC 1952
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// True iff `data` starts with the gzip magic sequence.
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Inflate a gzip-compressed buffer.
///
/// Fails with [`DecodeError::Format`] when the magic bytes are missing, and
/// with the same kind when the stream itself turns out to be truncated or
/// corrupt.
pub fn decompress_gzip(data: &[u8]) -> DecodeResult<Vec<u8>> {
    if !is_gzip(data) {
        return Err(DecodeError::Format(Container::Gzip));
    }

    let mut decoder = GzDecoder::new(data);
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(|_| DecodeError::Format(Container::Gzip))?;
    debug!("inflated {} compressed bytes into {}", data.len(), raw.len());
    Ok(raw)
}
