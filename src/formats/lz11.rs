//! The nibble-tagged `0x11` extension of Lz10. Decode-only.
//!
//! Framing matches Lz10 (`0x11` magic, 24-bit little-endian decompressed
//! size, MSB-first flag groups), but a match token's first nibble selects one
//! of three shapes:
//!
//! ```text
//! tag 2..15:  LLLL DDDD DDDD DDDD                      length = tag + 1  (3..16)
//! tag 0:      0000 LLLL LLLL DDDD DDDD DDDD            length + 0x11     (17..272)
//! tag 1:      0001 LLLL LLLL LLLL LLLL DDDD DDDD DDDD  length + 0x111    (273..65808)
//! ```
//!
//! Distances are 12-bit, stored minus one, against the decompressed stream.

use crate::bits::{BitOrder, BitstreamReader};
use crate::error::{Error, Result};
use crate::formats::{self, Descriptor, Endian, Format, VariantCodec};

pub(crate) const MAGIC: u8 = 0x11;
const WINDOW: usize = 0x1000;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = 0x1_0110;
const MAX_INPUT: usize = 0xFF_FFFF;

static DESCRIPTOR: Descriptor = Descriptor {
    format: Format::Lz11,
    name: "LZ11",
    min_match: MIN_MATCH,
    max_match: MAX_MATCH,
    window: WINDOW,
    magic: Some(&[MAGIC]),
    token_endian: Endian::Big,
    max_input: Some(MAX_INPUT),
    supports_encoding: false,
};

pub struct Lz11;

impl VariantCodec for Lz11 {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn identify(&self, data: &[u8]) -> bool {
        data.len() >= 4 && data[0] == MAGIC
    }

    fn compress(&self, _data: &[u8]) -> Result<Vec<u8>> {
        Err(Error::EncodingUnsupported { format: DESCRIPTOR.name })
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress(data)
    }
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
            if out.len() == expected {
                break 'stream;
            }
            if !is_match {
                out.push(r.read_u8()?);
                continue;
            }
            let b0 = r.read_u8()? as usize;
            let (length, distance) = match b0 >> 4 {
                0 => {
                    let b1 = r.read_u8()? as usize;
                    let b2 = r.read_u8()? as usize;
                    let length = ((b0 & 0xF) << 4 | b1 >> 4) + 0x11;
                    let distance = ((b1 & 0xF) << 8 | b2) + 1;
                    (length, distance)
                }
                1 => {
                    let b1 = r.read_u8()? as usize;
                    let b2 = r.read_u8()? as usize;
                    let b3 = r.read_u8()? as usize;
                    let length = ((b0 & 0xF) << 12 | b1 << 4 | b2 >> 4) + 0x111;
                    let distance = ((b2 & 0xF) << 8 | b3) + 1;
                    (length, distance)
                }
                tag => {
                    let b1 = r.read_u8()? as usize;
                    let length = tag + 1;
                    let distance = ((b0 & 0xF) << 8 | b1) + 1;
                    (length, distance)
                }
            };
            formats::copy_backreference(&mut out, distance, length)?;
        }
    }
    // A corrupt final match may overrun the declared size; the shipped
    // decoders stop copying at the boundary, so clamp to match them
    out.truncate(expected);
    Ok(out)
}
