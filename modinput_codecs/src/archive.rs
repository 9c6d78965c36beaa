use crate::error::{Container, DecodeError, DecodeResult};
use log::debug;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// True iff `data` parses as a zip archive (readable central directory).
pub fn is_zip(data: &[u8]) -> bool {
    ZipArchive::new(Cursor::new(data)).is_ok()
}

/// Extract the contents of a single-entry zip archive.
///
/// The checks are layered so every failure reports its own cause:
///
/// 1. the buffer must parse as a zip archive ([`DecodeError::Format`]),
/// 2. the archive must hold exactly one entry: zero is not a usable payload
///    ([`DecodeError::Format`]) and two or more are rejected rather than
///    narrowed to the first ([`DecodeError::MultipleEntries`]),
/// 3. the entry must decode ([`DecodeError::Extraction`]),
/// 4. the extracted length must equal the recorded uncompressed size, which
///    catches truncated or tampered archives ([`DecodeError::SizeMismatch`]).
pub fn decompress_zip(data: &[u8]) -> DecodeResult<Vec<u8>> {
    let Ok(mut archive) = ZipArchive::new(Cursor::new(data)) else {
        return Err(DecodeError::Format(Container::Zip));
    };

    match archive.len() {
        0 => return Err(DecodeError::Format(Container::Zip)),
        1 => {}
        entries => return Err(DecodeError::MultipleEntries(entries)),
    }

    let mut entry = archive
        .by_index(0)
        .map_err(|err| DecodeError::Extraction(err.into()))?;
    let expected = entry.size();
    let mut raw = Vec::new();
    entry.read_to_end(&mut raw).map_err(DecodeError::Extraction)?;

    if raw.len() as u64 != expected {
        return Err(DecodeError::SizeMismatch {
            expected,
            actual: raw.len() as u64,
        });
    }
    debug!("extracted {} bytes from single-entry archive", raw.len());
    Ok(raw)
}
