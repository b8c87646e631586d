//! One codec per legacy wire format.
//!
//! Every codec implements the same capability interface, [`VariantCodec`],
//! and describes itself through a static [`Descriptor`]. The wrapped formats
//! (`Cxlz`, `Lz01`) delegate to their base codec behind a fixed magic prefix,
//! so their payloads stay byte-identical to the base format's output.

pub mod cxlz;
pub mod lz01;
pub mod lz10;
pub mod lz11;
pub mod lzss;
pub mod prs;

pub use cxlz::Cxlz;
pub use lz01::Lz01;
pub use lz10::Lz10;
pub use lz11::Lz11;
pub use lzss::Lzss;
pub use prs::Prs;

use crate::error::{Error, Result};
use std::fmt;

/// Identifier for a registered compression format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Classic `0x10` scheme (direct distances, 24-bit size header)
    Lz10,
    /// Nibble-tagged extension of Lz10 with long matches; decode-only
    Lz11,
    /// Lz10 behind a fixed `cxlz` prefix
    Cxlz,
    /// Headerless circular-buffer scheme (4096-byte window, 0xFEE start)
    Lzss,
    /// Lzss behind a fixed `LZ01` prefix
    Lz01,
    /// Interleaved-control-bit scheme with short and long copy shapes
    Prs,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Lz10 => "LZ10",
            Format::Lz11 => "LZ11",
            Format::Cxlz => "CXLZ",
            Format::Lzss => "LZSS",
            Format::Lz01 => "LZ01",
            Format::Prs => "PRS",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte order of a format's multi-byte match-token fields.
///
/// Nothing is shared across formats here: each codec declares its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Static description of one wire format
pub struct Descriptor {
    pub format: Format,
    pub name: &'static str,
    /// Shortest match the encoder may emit
    pub min_match: usize,
    /// Longest match a single token can carry
    pub max_match: usize,
    /// History window in bytes
    pub window: usize,
    /// Leading signature, if the format has one
    pub magic: Option<&'static [u8]>,
    pub token_endian: Endian,
    /// Hard cap on compressible input, where the size field imposes one
    pub max_input: Option<usize>,
    /// Some legacy formats are decode-only
    pub supports_encoding: bool,
}

/// Capability interface implemented by each format codec.
///
/// Implementations are stateless unit structs; all per-call state (match
/// finder, staging buffer, output) is local to `compress`/`decompress`, so a
/// codec may serve concurrent calls without locking.
pub trait VariantCodec: Send + Sync {
    fn descriptor(&self) -> &'static Descriptor;

    /// Whether `data` begins a stream of this format. Pure and cheap: a magic
    /// comparison where one exists, otherwise a structural walk of the first
    /// token group. False for empty input in every format.
    fn identify(&self, data: &[u8]) -> bool;

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Reject inputs the format's size field cannot express
pub(crate) fn check_input_limit(desc: &Descriptor, size: usize) -> Result<()> {
    match desc.max_input {
        Some(limit) if size > limit => {
            Err(Error::InputTooLarge { format: desc.name, size, limit })
        }
        _ => Ok(()),
    }
}

/// Copy `length` bytes from `distance` back in `out`, byte by byte.
///
/// Byte-wise copying is what makes overlapping self-referential matches
/// (distance < length) replay their own output, which the legacy formats
/// rely on.
pub(crate) fn copy_backreference(out: &mut Vec<u8>, distance: usize, length: usize) -> Result<()> {
    if distance == 0 || distance > out.len() {
        return Err(Error::InvalidDistance { distance, available: out.len() });
    }
    for _ in 0..length {
        let byte = out[out.len() - distance];
        out.push(byte);
    }
    Ok(())
}
