use bitstream_io::{BigEndian, BitRead, BitReader};
use thiserror::Error;

pub mod timestamp;

/// The error type for bit range reads.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitRangeError {
    /// The requested width cannot be represented by the returned integer.
    #[error("invalid bit width {width} (expected 1 to 64)")]
    InvalidWidth { width: u32 },
    /// The requested range ends past the end of the buffer.
    #[error("bit range {offset}+{width} exceeds the {available} bits available")]
    OutOfRange {
        offset: u32,
        width: u32,
        available: usize,
    },
}

/// Reads `width` bits starting at bit `offset` of `data`, most significant bit first.
///
/// Bit 0 is the most significant bit of the first byte. The value is returned right-aligned,
/// with all bits above `width` cleared.
pub fn read_fixed_integer(data: &[u8], offset: u32, width: u32) -> Result<u64, BitRangeError> {
    if !(1..=u64::BITS).contains(&width) {
        return Err(BitRangeError::InvalidWidth { width });
    }

    let available = data.len() * 8;
    let out_of_range = BitRangeError::OutOfRange {
        offset,
        width,
        available,
    };
    let end = offset as usize + width as usize;
    if end > available {
        return Err(out_of_range);
    }

    // start at the byte holding the first bit, then skip the leading bits of that byte
    let start = offset as usize / 8;
    let mut r = BitReader::endian(&data[start..], BigEndian);
    r.skip(offset % 8).map_err(|_| out_of_range)?;
    r.read::<u64>(width).map_err(|_| out_of_range)
}

/// Reads the single bit at `offset`.
pub fn read_bool(data: &[u8], offset: u32) -> Result<bool, BitRangeError> {
    read_fixed_integer(data, offset, 1).map(|n| n == 1)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use test_case::test_case;

    /// Transform a string of literal binary digits into a vector of bytes.
    /// Zeroes will be appended to fill missing bits.
    pub(crate) fn b(s: &str) -> Vec<u8> {
        let chars = s
            .chars()
            .filter(|&c| c == '1' || c == '0')
            .collect::<Vec<_>>();
        chars
            .chunks(8)
            .map(|c| (8 - c.len(), String::from_iter(c)))
            .map(|(l, s)| u8::from_str_radix(&s, 2).map(|n| n << l))
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or(vec![])
    }

    #[test]
    fn bytes() {
        assert_eq!(b("00000001 00000010 00000011"), vec![1, 2, 3]);
        assert_eq!(b("000000 010000 001000 000011"), vec![1, 2, 3]);
        assert_eq!(b("000000 010000 001000 000011 1000"), vec![1, 2, 3, 128]);
    }

    #[test_case("000101", 0, 6 => 5 ; "aligned")]
    #[test_case("101010", 0, 6 => 42 ; "aligned max")]
    #[test_case("11 000101", 2, 6 => 5 ; "unaligned within byte")]
    #[test_case("000000 1010 1010 1111", 6, 12 => 0xaaf ; "crossing two boundaries")]
    #[test_case("0000 1111 1111 1111 1111 0000", 4, 16 => 0xffff ; "u16 straddling three bytes")]
    #[test_case("1111111 0 1111111", 7, 1 => 0 ; "single cleared bit")]
    fn read_int(s: &str, offset: u32, width: u32) -> u64 {
        read_fixed_integer(&b(s), offset, width).unwrap()
    }

    #[test]
    fn read_36_bits() {
        let buf = b("000000 001111101100100110001110010001011101 00");
        assert_eq!(read_fixed_integer(&buf, 6, 36).unwrap(), 16854344797);
    }

    #[test]
    fn read_full_width() {
        let buf = [0xff; 9];
        assert_eq!(read_fixed_integer(&buf, 3, 64).unwrap(), u64::MAX);
    }

    #[test]
    fn higher_bits_are_masked() {
        // surrounding ones must not leak into the value
        let buf = b("1111 0000 0000 1111");
        assert_eq!(read_fixed_integer(&buf, 4, 8).unwrap(), 0);
    }

    #[test]
    fn read_bits() {
        let buf = b("0100 0001");
        let set = (0..8)
            .filter(|&i| read_bool(&buf, i).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(set, vec![1, 7]);
    }

    #[test_case(0, 17 ; "too wide for buffer")]
    #[test_case(9, 8 ; "ends one bit late")]
    #[test_case(16, 1 ; "starts past the end")]
    fn out_of_range(offset: u32, width: u32) {
        let buf = [0u8; 2];
        assert_eq!(
            read_fixed_integer(&buf, offset, width).unwrap_err(),
            BitRangeError::OutOfRange {
                offset,
                width,
                available: 16
            }
        );
    }

    #[test]
    fn last_bit_is_readable() {
        assert!(read_bool(&[0x01], 7).unwrap());
        assert!(read_bool(&[0x01], 8).is_err());
    }

    #[test_case(0 ; "zero")]
    #[test_case(65 ; "wider than u64")]
    fn invalid_width(width: u32) {
        assert_eq!(
            read_fixed_integer(&[0; 16], 0, width).unwrap_err(),
            BitRangeError::InvalidWidth { width }
        );
    }
}
