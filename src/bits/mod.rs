//! Bitstream packing primitives shared by the format codecs.
//!
//! There is no single universal bit layout: each codec owns its token packing,
//! but all of them build on the same pieces. Flag groups carry eight
//! literal/match bits in a per-format bit order, with fixed-endian multi-byte
//! fields read and written around them.

pub mod reader;
pub mod writer;

pub use reader::{BitstreamReader, FlagBits};
pub use writer::{BitstreamWriter, GroupWriter};

/// Order in which the eight bits of a flag group are consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    /// Most significant bit first (Lz10 family)
    Msb,
    /// Least significant bit first (Lzss family, Prs control stream)
    Lsb,
}
