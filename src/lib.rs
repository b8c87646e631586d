//! Byte-exact codecs for the LZ77-family compression formats used by legacy
//! game assets.
//!
//! Every format here is a fixed wire layout baked into shipped game binaries,
//! so the decoders reproduce the original bytes exactly and the encoders emit
//! streams those legacy decoders accept. The formats share one LZ77 shape
//! (flag bits selecting literals or back-references) but differ in framing,
//! flag conventions, token packing, and window semantics; see the
//! [`formats`] module for the individual layouts.
//!
//! Compression is single-stream and synchronous. Each call owns all of its
//! state, so independent calls may run on separate threads freely.
//!
//! ```
//! use retrolz::Format;
//!
//! let data = b"legacy assets compress well when they repeat themselves";
//! let packed = retrolz::compress(data, Format::Lz10)?;
//! let (format, plain) = retrolz::decompress(&packed)?;
//! assert_eq!(format, Format::Lz10);
//! assert_eq!(plain, data);
//! # Ok::<(), retrolz::Error>(())
//! ```

pub mod bits;
pub mod error;
pub mod formats;
pub mod matcher;
pub mod registry;
pub mod tokens;

pub use error::{Error, Result};
pub use formats::{Descriptor, Endian, Format, VariantCodec};
pub use registry::{registry, FormatRegistry};
pub use tokens::Token;

/// Sniff the compression format of `data` against the built-in registry
pub fn identify(data: &[u8]) -> Option<Format> {
    registry().identify(data)
}

/// Compress `data` into the given format's wire layout.
///
/// Fails with [`Error::InputTooLarge`] when the format's size field cannot
/// express the input length, and with [`Error::EncodingUnsupported`] for
/// decode-only formats (check [`can_compress`] first).
pub fn compress(data: &[u8], format: Format) -> Result<Vec<u8>> {
    registry().compress(data, format)
}

/// Auto-detect the format of `data` and decompress it
pub fn decompress(data: &[u8]) -> Result<(Format, Vec<u8>)> {
    registry().decompress(data)
}

/// Decompress `data` as a specific format, skipping auto-detection.
///
/// Prefer this over [`decompress`] when the format is known out-of-band
/// (an archive entry whose container dictates the compression, say): the
/// headerless formats carry no signature, so sniffing them is heuristic.
pub fn decompress_as(data: &[u8], format: Format) -> Result<Vec<u8>> {
    registry().decompress_as(data, format)
}

/// Whether `format` supports compression (some legacy formats are decode-only)
pub fn can_compress(format: Format) -> bool {
    registry().can_compress(format)
}
