//! The headerless circular-buffer scheme.
//!
//! The decoder maintains a zero-filled 4096-byte window buffer with writes
//! starting at slot 0xFEE. Tokens come in groups of eight behind an LSB-first
//! flag byte where a set bit is a literal. A match is two bytes:
//!
//! ```text
//! byte 0: SSSS SSSS   low eight bits of the window slot of the match start
//! byte 1: SSSS LLLL   high four slot bits, then length - 3 (3..18)
//! ```
//!
//! There is no header and no size field; the stream simply ends at a token
//! boundary. Slots that were never written read back as zero, which legal
//! streams may exploit.

use crate::bits::{BitOrder, BitstreamReader, BitstreamWriter, FlagBits, GroupWriter};
use crate::error::Result;
use crate::formats::{Descriptor, Endian, Format, VariantCodec};
use crate::matcher::{self, CircularBufferFinder};
use crate::tokens::Token;

const WINDOW: usize = 0x1000;
pub(crate) const BUF_START: usize = 0xFEE;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = 18;

static DESCRIPTOR: Descriptor = Descriptor {
    format: Format::Lzss,
    name: "LZSS",
    min_match: MIN_MATCH,
    max_match: MAX_MATCH,
    window: WINDOW,
    magic: None,
    token_endian: Endian::Little,
    max_input: None,
    supports_encoding: true,
};

pub struct Lzss;

impl VariantCodec for Lzss {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    // No magic to check: walk the first flag group and reject anything that
    // ends mid-token. Weak by nature, so the registry tries this format last.
    fn identify(&self, data: &[u8]) -> bool {
        if data.len() < 2 {
            return false;
        }
        let mut flags = FlagBits::new(data[0], BitOrder::Lsb);
        let mut pos = 1;
        while let Some(is_literal) = flags.next() {
            if pos == data.len() {
                return true;
            }
            pos += if is_literal { 1 } else { 2 };
            if pos > data.len() {
                return false;
            }
        }
        true
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress(data)
    }
}

pub(crate) fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut finder = CircularBufferFinder::new(WINDOW, BUF_START, MIN_MATCH, MAX_MATCH);
    let tokens = matcher::tokenize(data, &mut finder);

    let mut w = BitstreamWriter::with_capacity(data.len() / 2 + 8);
    let mut group = GroupWriter::new(BitOrder::Lsb);
    for token in tokens {
        match token {
            Token::Literal(byte) => group.push(&mut w, true, &[byte]),
            Token::Match { offset: slot, length } => {
                let token = [
                    (slot & 0xFF) as u8,
                    ((slot >> 4) & 0xF0) as u8 | (length as u8 - MIN_MATCH as u8),
                ];
                group.push(&mut w, false, &token);
            }
        }
    }
    group.finish(&mut w);

    Ok(w.into_vec())
}

pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut r = BitstreamReader::new(data);
    let mut buf = [0u8; WINDOW];
    let mut ptr = BUF_START;
    let mut out = Vec::with_capacity(data.len() * 2);

    while !r.is_empty() {
        let mut flags = r.read_flags(BitOrder::Lsb)?;
        while let Some(is_literal) = flags.next() {
            // Streams end at a token boundary, leaving trailing flag bits unused
            if r.is_empty() {
                break;
            }
            if is_literal {
                let byte = r.read_u8()?;
                out.push(byte);
                buf[ptr] = byte;
                ptr = (ptr + 1) & (WINDOW - 1);
            } else {
                let b0 = r.read_u8()? as usize;
                let b1 = r.read_u8()? as usize;
                let slot = b0 | (b1 & 0xF0) << 4;
                let length = (b1 & 0x0F) + MIN_MATCH;
                for i in 0..length {
                    let byte = buf[(slot + i) & (WINDOW - 1)];
                    out.push(byte);
                    buf[ptr] = byte;
                    ptr = (ptr + 1) & (WINDOW - 1);
                }
            }
        }
    }
    Ok(out)
}
