//! The classic `0x10` scheme.
//!
//! Framing is a one-byte `0x10` magic followed by the decompressed size as a
//! 24-bit little-endian value, which caps compressible input at 16 MiB - 1.
//! Tokens come in groups of eight behind an MSB-first flag byte; a set bit is
//! a match, packed big-endian into two bytes:
//!
//! ```text
//! LLLL DDDD DDDD DDDD   L = length - 3 (3..18), D = distance - 1 (1..4096)
//! ```

use crate::bits::{BitOrder, BitstreamReader, BitstreamWriter, GroupWriter};
use crate::error::{Error, Result};
use crate::formats::{self, Descriptor, Endian, Format, VariantCodec};
use crate::matcher::{self, DirectIndexFinder};
use crate::tokens::Token;

pub(crate) const MAGIC: u8 = 0x10;
const WINDOW: usize = 0x1000;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = 18;
const MAX_INPUT: usize = 0xFF_FFFF;

static DESCRIPTOR: Descriptor = Descriptor {
    format: Format::Lz10,
    name: "LZ10",
    min_match: MIN_MATCH,
    max_match: MAX_MATCH,
    window: WINDOW,
    magic: Some(&[MAGIC]),
    token_endian: Endian::Big,
    max_input: Some(MAX_INPUT),
    supports_encoding: true,
};

pub struct Lz10;

impl VariantCodec for Lz10 {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn identify(&self, data: &[u8]) -> bool {
        data.len() >= 4 && data[0] == MAGIC
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress(data)
    }
}

pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    formats::check_input_limit(&DESCRIPTOR, data.len())?;

    let mut finder = DirectIndexFinder::new(WINDOW, MIN_MATCH, MAX_MATCH);
    let tokens = matcher::tokenize(data, &mut finder);

    let mut w = BitstreamWriter::with_capacity(4 + data.len() / 2);
    w.write_u8(MAGIC);
    w.write_u24_le(data.len() as u32);

    let mut group = GroupWriter::new(BitOrder::Msb);
    for token in tokens {
        match token {
            Token::Literal(byte) => group.push(&mut w, false, &[byte]),
            Token::Match { offset, length } => {
                let field = (length - MIN_MATCH as u16) << 12 | (offset - 1);
                group.push(&mut w, true, &field.to_be_bytes());
            }
        }
    }
    group.finish(&mut w);

    Ok(w.into_vec())
}

pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut r = BitstreamReader::new(data);
    if r.read_u8()? != MAGIC {
        return Err(Error::InvalidHeader { format: DESCRIPTOR.name });
    }
    let expected = r.read_u24_le()? as usize;

    let mut out = Vec::with_capacity(expected);
    'stream: while out.len() < expected {
        let mut flags = r.read_flags(BitOrder::Msb)?;
        while let Some(is_match) = flags.next() {
            // The final flag byte is only partially used
            if out.len() == expected {
                break 'stream;
            }
            if is_match {
                let field = r.read_u16_be()?;
                let distance = (field & 0x0FFF) as usize + 1;
                let length = (field >> 12) as usize + MIN_MATCH;
                formats::copy_backreference(&mut out, distance, length)?;
            } else {
                out.push(r.read_u8()?);
            }
        }
    }
    // A corrupt final match may overrun the declared size; the shipped
    // decoders stop copying at the boundary, so clamp to match them
    out.truncate(expected);
    Ok(out)
}
