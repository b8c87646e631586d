//! Lzss behind a fixed `LZ01` prefix.
//!
//! The four magic bytes are the only difference from [`Lzss`](super::Lzss):
//! everything after them is a complete headerless Lzss stream, byte-for-byte.

use crate::error::{Error, Result};
use crate::formats::{lzss, Descriptor, Endian, Format, VariantCodec};

pub(crate) const MAGIC: &[u8] = b"LZ01";

static DESCRIPTOR: Descriptor = Descriptor {
    format: Format::Lz01,
    name: "LZ01",
    min_match: 3,
    max_match: 18,
    window: 0x1000,
    magic: Some(MAGIC),
    token_endian: Endian::Little,
    max_input: None,
    supports_encoding: true,
};

pub struct Lz01;

impl VariantCodec for Lz01 {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn identify(&self, data: &[u8]) -> bool {
        data.len() >= 4 && data.starts_with(MAGIC)
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let payload = lzss::compress(data)?;
        let mut out = Vec::with_capacity(MAGIC.len() + payload.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&payload);
        Ok(out)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let payload = data
            .strip_prefix(MAGIC)
            .ok_or(Error::InvalidHeader { format: DESCRIPTOR.name })?;
        lzss::decompress(payload)
    }
}
