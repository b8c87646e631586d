//! Lz10 behind a fixed `cxlz` prefix.
//!
//! The four magic bytes are the only difference from [`Lz10`](super::Lz10):
//! everything after them is a complete Lz10 stream, byte-for-byte.

use crate::error::{Error, Result};
use crate::formats::{self, lz10, Descriptor, Endian, Format, VariantCodec};

pub(crate) const MAGIC: &[u8] = b"cxlz";

static DESCRIPTOR: Descriptor = Descriptor {
    format: Format::Cxlz,
    name: "CXLZ",
    min_match: 3,
    max_match: 18,
    window: 0x1000,
    magic: Some(MAGIC),
    token_endian: Endian::Big,
    max_input: Some(0xFF_FFFF),
    supports_encoding: true,
};

pub struct Cxlz;

impl VariantCodec for Cxlz {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn identify(&self, data: &[u8]) -> bool {
        data.len() >= 8 && data.starts_with(MAGIC) && data[4] == lz10::MAGIC
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        // Check up front so the error names this format, not the base one
        formats::check_input_limit(&DESCRIPTOR, data.len())?;
        let payload = lz10::compress(data)?;
        let mut out = Vec::with_capacity(MAGIC.len() + payload.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&payload);
        Ok(out)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let payload = data
            .strip_prefix(MAGIC)
            .ok_or(Error::InvalidHeader { format: DESCRIPTOR.name })?;
        lz10::decompress(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_exactly_lz10() {
        let data = b"the same bytes the same bytes";
        let wrapped = Cxlz.compress(data).unwrap();
        assert_eq!(&wrapped[..4], MAGIC);
        assert_eq!(&wrapped[4..], lz10::compress(data).unwrap().as_slice());
    }

    #[test]
    fn test_roundtrip() {
        let data = b"wrap me wrap me wrap me";
        let compressed = Cxlz.compress(data).unwrap();
        assert_eq!(Cxlz.decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_decompress_requires_prefix() {
        let bare = lz10::compress(b"no prefix here").unwrap();
        assert!(matches!(
            Cxlz.decompress(&bare).unwrap_err(),
            Error::InvalidHeader { format: "CXLZ" }
        ));
    }

    #[test]
    fn test_identify() {
        assert!(Cxlz.identify(b"cxlz\x10\x00\x00\x00"));
        assert!(!Cxlz.identify(b"cxlz"));
        assert!(!Cxlz.identify(b"CXLZ\x10\x00\x00\x00"));
        assert!(!Cxlz.identify(&[]));
    }
}
