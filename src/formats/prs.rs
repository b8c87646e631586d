//! The interleaved-control-bit scheme with two copy shapes.
//!
//! Control bits are consumed LSB-first from control bytes mixed into the data
//! stream; each control byte sits ahead of the token bytes its bits describe.
//! The token shapes:
//!
//! ```text
//! 1                     literal byte follows
//! 0 0 s1 s0  OOOOOOOO   short copy: length = s1 s0 + 2 (2..5),
//!                        distance = 0x100 - O (O = 0 means 256)
//! 0 1        u16 LE      long copy: low 3 bits = length - 2 (field 0 pulls an
//!                        extra byte, length = byte + 1), high 13 bits =
//!                        0x2000 - distance; a zero u16 ends the stream
//! ```
//!
//! The encoder never emits a copy shorter than three bytes; the decoder still
//! accepts the two-byte short copies legacy encoders produce.

use crate::bits::{BitstreamReader, BitstreamWriter};
use crate::error::Result;
use crate::formats::{self, Descriptor, Endian, Format, VariantCodec};
use crate::matcher::{self, DirectIndexFinder};
use crate::tokens::Token;

const WINDOW: usize = 0x1FFF;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = 256;
// Longest copy the four-control-bit short shape can express
const SHORT_MAX_LEN: usize = 5;
// Keep the short-copy offset byte nonzero, as the classic encoder does
const SHORT_MAX_DIST: usize = 0xFF;

static DESCRIPTOR: Descriptor = Descriptor {
    format: Format::Prs,
    name: "PRS",
    min_match: MIN_MATCH,
    max_match: MAX_MATCH,
    window: WINDOW,
    magic: None,
    token_endian: Endian::Little,
    max_input: None,
    supports_encoding: true,
};

pub struct Prs;

impl VariantCodec for Prs {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    // Headerless: walk the tokens described by the first control byte. The
    // shortest valid stream is the three-byte terminator.
    fn identify(&self, data: &[u8]) -> bool {
        if data.len() < 3 {
            return false;
        }
        let mut bits = ControlScan::new(data[0]);
        let mut pos = 1;
        while let Some(bit) = bits.next() {
            if bit {
                // literal
                if pos >= data.len() {
                    return false;
                }
                pos += 1;
                continue;
            }
            match bits.next() {
                // The copy's remaining control bits live in a control byte
                // beyond this group; out of scanning range.
                None => return true,
                Some(true) => {
                    if pos + 2 > data.len() {
                        return false;
                    }
                    let field = u16::from_le_bytes([data[pos], data[pos + 1]]);
                    pos += 2;
                    if field == 0 {
                        return true;
                    }
                    if field & 7 == 0 {
                        if pos >= data.len() {
                            return false;
                        }
                        pos += 1;
                    }
                }
                Some(false) => {
                    if bits.next().is_none() || bits.next().is_none() {
                        return true;
                    }
                    if pos >= data.len() {
                        return false;
                    }
                    pos += 1;
                }
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
    let mut finder = DirectIndexFinder::new(WINDOW, MIN_MATCH, MAX_MATCH);
    let tokens = matcher::tokenize(data, &mut finder);

    let mut w = BitstreamWriter::with_capacity(data.len() / 2 + 8);
    let mut ctrl = ControlWriter::new(&mut w);
    for token in tokens {
        match token {
            Token::Literal(byte) => {
                ctrl.put(&mut w, true);
                w.write_u8(byte);
            }
            Token::Match { offset, length } => {
                let (distance, length) = (offset as usize, length as usize);
                if distance <= SHORT_MAX_DIST && length <= SHORT_MAX_LEN {
                    let size = length - 2;
                    ctrl.put(&mut w, false);
                    ctrl.put(&mut w, false);
                    ctrl.put(&mut w, size & 2 != 0);
                    ctrl.put(&mut w, size & 1 != 0);
                    w.write_u8((0x100 - distance) as u8);
                } else {
                    ctrl.put(&mut w, false);
                    ctrl.put(&mut w, true);
                    let field = ((0x2000 - distance) << 3) as u16;
                    if length <= 9 {
                        w.write_u16_le(field | (length as u16 - 2));
                    } else {
                        w.write_u16_le(field);
                        w.write_u8((length - 1) as u8);
                    }
                }
            }
        }
    }

    // Terminator: a long copy with a zero field
    ctrl.put(&mut w, false);
    ctrl.put(&mut w, true);
    w.write_u16_le(0);
    ctrl.finish(&mut w);

    Ok(w.into_vec())
}

pub(crate) fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut r = BitstreamReader::new(data);
    let mut ctrl = ControlReader::new();
    let mut out = Vec::with_capacity(data.len() * 2);

    loop {
        if ctrl.next(&mut r)? {
            out.push(r.read_u8()?);
            continue;
        }
        let (distance, length) = if ctrl.next(&mut r)? {
            let field = r.read_u16_le()?;
            if field == 0 {
                break;
            }
            let distance = 0x2000 - (field >> 3) as usize;
            match (field & 7) as usize {
                0 => (distance, r.read_u8()? as usize + 1),
                size => (distance, size + 2),
            }
        } else {
            let hi = ctrl.next(&mut r)? as usize;
            let lo = ctrl.next(&mut r)? as usize;
            let length = (hi << 1 | lo) + 2;
            (0x100 - r.read_u8()? as usize, length)
        };
        formats::copy_backreference(&mut out, distance, length)?;
    }
    Ok(out)
}

/// Encoder side of the control stream: the current control byte is reserved
/// in the output and patched once its eight bits are known.
struct ControlWriter {
    slot: usize,
    bits: u8,
    count: u8,
}

impl ControlWriter {
    fn new(w: &mut BitstreamWriter) -> Self {
        Self { slot: w.reserve_u8(), bits: 0, count: 0 }
    }

    fn put(&mut self, w: &mut BitstreamWriter, bit: bool) {
        if self.count == 8 {
            w.patch_u8(self.slot, self.bits);
            self.slot = w.reserve_u8();
            self.bits = 0;
            self.count = 0;
        }
        if bit {
            self.bits |= 1 << self.count;
        }
        self.count += 1;
    }

    fn finish(self, w: &mut BitstreamWriter) {
        w.patch_u8(self.slot, self.bits);
    }
}

/// Decoder side: pulls a fresh control byte from the stream when the current
/// one is spent.
struct ControlReader {
    bits: u8,
    count: u8,
}

impl ControlReader {
    fn new() -> Self {
        Self { bits: 0, count: 0 }
    }

    fn next(&mut self, r: &mut BitstreamReader) -> Result<bool> {
        if self.count == 0 {
            self.bits = r.read_u8()?;
            self.count = 8;
        }
        let bit = self.bits & 1 != 0;
        self.bits >>= 1;
        self.count -= 1;
        Ok(bit)
    }
}

/// Bounded LSB-first scan over a single control byte, for `identify`
struct ControlScan {
    bits: u8,
    taken: u8,
}

impl ControlScan {
    fn new(bits: u8) -> Self {
        Self { bits, taken: 0 }
    }

    fn next(&mut self) -> Option<bool> {
        if self.taken == 8 {
            return None;
        }
        let bit = self.bits & (1 << self.taken) != 0;
        self.taken += 1;
        Some(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_compress_empty_is_bare_terminator() {
        let compressed = compress(&[]).unwrap();
        assert_eq!(compressed, vec![0x02, 0x00, 0x00]);
        assert_eq!(decompress(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hand_built_literals() {
        // Control bits: literal, literal, long-copy terminator
        let stream = vec![0x0B, 0x41, 0x42, 0x00, 0x00];
        assert_eq!(decompress(&stream).unwrap(), b"AB");
    }

    #[test]
    fn test_decode_hand_built_short_copy() {
        // Literal 'A', short copy (length 3, distance 1), terminator
        let stream = vec![0x51, 0x41, 0xFF, 0x00, 0x00];
        assert_eq!(decompress(&stream).unwrap(), b"AAAA");
    }

    #[test]
    fn test_decode_accepts_legacy_two_byte_copy() {
        // Short copy with size bits 0,0: length 2. Our encoder never emits
        // this, the decoder must still take it.
        let stream = vec![0x41, 0x41, 0xFF, 0x00, 0x00];
        assert_eq!(decompress(&stream).unwrap(), b"AAA");
    }

    #[test]
    fn test_roundtrip_uses_extended_length() {
        let data = vec![0x7E; 300];
        let compressed = compress(&data).unwrap();
        // Run of 300: one literal plus two copies at most, far below 300
        assert!(compressed.len() < 16);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_roundtrip_long_distance() {
        // Repeat a block across a gap wider than the short-copy range
        let mut data = b"pattern!".repeat(2);
        data.extend(std::iter::repeat(0u8).take(600));
        data.extend_from_slice(b"pattern!");
        let compressed = compress(&data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_decode_rejects_wild_distance() {
        // Long copy (distance 1, length 3) with nothing decoded yet
        let stream = vec![0x02, 0xF9, 0xFF];
        assert!(matches!(
            decompress(&stream).unwrap_err(),
            Error::InvalidDistance { distance: 1, available: 0 }
        ));
    }

    #[test]
    fn test_decode_rejects_missing_terminator() {
        // One literal, then the stream just stops
        let stream = vec![0x01, 0x41];
        assert!(matches!(decompress(&stream).unwrap_err(), Error::TruncatedStream));
    }

    #[test]
    fn test_identify() {
        assert!(Prs.identify(&[0x02, 0x00, 0x00]));
        assert!(Prs.identify(&compress(b"hello hello hello").unwrap()));
        assert!(!Prs.identify(&[0x01, 0x41]));
        assert!(!Prs.identify(&[0x02, 0x00]));
        assert!(!Prs.identify(&[]));
    }
}
