use super::BitOrder;
use crate::error::Result;
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Checked reader over a fully-resident compressed stream.
///
/// All fixed-width reads map a short stream onto
/// [`Error::TruncatedStream`](crate::Error::TruncatedStream), so decode loops
/// can use `?` without inspecting positions.
pub struct BitstreamReader<'a> {
    cur: Cursor<&'a [u8]>,
}

impl<'a> BitstreamReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { cur: Cursor::new(data) }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.cur.read_u8()?)
    }

    pub fn read_u16_be(&mut self) -> Result<u16> {
        Ok(self.cur.read_u16::<BigEndian>()?)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(self.cur.read_u16::<LittleEndian>()?)
    }

    /// Read a 24-bit little-endian value (the legacy size-field width)
    pub fn read_u24_le(&mut self) -> Result<u32> {
        Ok(self.cur.read_u24::<LittleEndian>()?)
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.cur.read_exact(buf)?;
        Ok(())
    }

    /// Read one control byte as a flag group consumed in `order`
    pub fn read_flags(&mut self, order: BitOrder) -> Result<FlagBits> {
        Ok(FlagBits::new(self.read_u8()?, order))
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.cur.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.cur.get_ref().len() - self.position()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// One group of eight literal/match flag bits
#[derive(Clone, Copy, Debug)]
pub struct FlagBits {
    bits: u8,
    taken: u8,
    order: BitOrder,
}

impl FlagBits {
    pub fn new(bits: u8, order: BitOrder) -> Self {
        Self { bits, taken: 0, order }
    }

    /// The next flag bit, or `None` once all eight are consumed
    pub fn next(&mut self) -> Option<bool> {
        if self.taken == 8 {
            return None;
        }
        let mask = match self.order {
            BitOrder::Msb => 0x80 >> self.taken,
            BitOrder::Lsb => 1 << self.taken,
        };
        self.taken += 1;
        Some(self.bits & mask != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_fixed_width_reads() {
        let data = [0x12, 0x34, 0x12, 0x34, 0x78, 0x56, 0x34];
        let mut r = BitstreamReader::new(&data);
        assert_eq!(r.read_u16_be().unwrap(), 0x1234);
        assert_eq!(r.read_u16_le().unwrap(), 0x3412);
        assert_eq!(r.read_u24_le().unwrap(), 0x345678);
        assert!(r.is_empty());
    }

    #[test]
    fn test_short_read_is_truncation() {
        let mut r = BitstreamReader::new(&[0xAB]);
        assert!(matches!(r.read_u16_be(), Err(Error::TruncatedStream)));
    }

    #[test]
    fn test_flags_msb_first() {
        let mut flags = FlagBits::new(0b1010_0000, BitOrder::Msb);
        assert_eq!(flags.next(), Some(true));
        assert_eq!(flags.next(), Some(false));
        assert_eq!(flags.next(), Some(true));
        for _ in 0..5 {
            assert_eq!(flags.next(), Some(false));
        }
        assert_eq!(flags.next(), None);
    }

    #[test]
    fn test_flags_lsb_first() {
        let mut flags = FlagBits::new(0b0000_0101, BitOrder::Lsb);
        assert_eq!(flags.next(), Some(true));
        assert_eq!(flags.next(), Some(false));
        assert_eq!(flags.next(), Some(true));
        for _ in 0..5 {
            assert_eq!(flags.next(), Some(false));
        }
        assert_eq!(flags.next(), None);
    }

    #[test]
    fn test_position_tracking() {
        let data = [0u8; 6];
        let mut r = BitstreamReader::new(&data);
        r.read_u24_le().unwrap();
        assert_eq!(r.position(), 3);
        assert_eq!(r.remaining(), 3);
    }
}
