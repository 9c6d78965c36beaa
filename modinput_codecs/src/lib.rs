//! # Validated decompression for collected payloads
//!
//! Collectors hand over raw byte buffers that may arrive gzip- or
//! zip-compressed. This crate validates and unpacks them before the content
//! is turned into events, and it is strict about it: a payload either matches
//! the claimed container format exactly or the call fails with a
//! [`DecodeError`] naming the specific reason. Nothing is retried, narrowed
//! or silently degraded; in particular, a zip archive holding more than one
//! entry is rejected outright rather than approximated by its first entry.
//!
//! Format sniffing ([`is_gzip`], [`is_zip`]) is separate from decompression
//! so a caller can branch on content type before committing to a decode:
//!
//! ```
//! use modinput_codecs::{decompress_gzip, decompress_zip, is_gzip, is_zip};
//!
//! # fn recover(payload: &[u8]) -> Result<Vec<u8>, modinput_codecs::DecodeError> {
//! if is_gzip(payload) {
//!     decompress_gzip(payload)
//! } else if is_zip(payload) {
//!     decompress_zip(payload)
//! } else {
//!     Ok(payload.to_vec())
//! }
//! # }
//! ```
//!
//! All operations are synchronous, pure transforms over borrowed byte slices,
//! bounded by input size; there is no I/O and no shared state.
#![warn(missing_docs)]

pub use archive::decompress_zip;
pub use archive::is_zip;
pub use error::Container;
pub use error::DecodeError;
pub use error::DecodeResult;
pub use gzip::decompress_gzip;
pub use gzip::is_gzip;

mod archive;
mod error;
mod gzip;
