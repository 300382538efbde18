#![allow(dead_code)]

use bitstream_io::{BigEndian, BitWrite, BitWriter};

/// Custom base64 implementation, 6-bits aligned, no padding,
/// using the URL Safe Base64 dictionary.
pub fn decode(s: &str) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(s.len());
    let mut bw = BitWriter::endian(&mut buffer, BigEndian);

    for b in s.bytes() {
        let value = base64_value(b).unwrap_or_else(|| panic!("invalid character {b}"));
        bw.write(6, value).expect("write into vec should not fail");
    }

    // write remaining value if we're not 8-bit aligned at this point
    let (n, value) = bw.into_unwritten();
    if n > 0 {
        buffer.push(value << (8 - n));
    }

    buffer
}

fn base64_value(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}

/// Header field values, in the order they are written.
pub struct HeaderFields {
    pub version: u8,
    pub created: u64,
    pub last_updated: u64,
    pub cmp_id: u16,
    pub cmp_version: u16,
    pub consent_screen: u8,
    pub consent_language: [u8; 2],
    pub vendor_list_version: u16,
    pub purposes: u32,
    pub max_vendor_id: u16,
}

/// Encodes a header the way a CMP would, padded with zeroes to `len` bytes.
pub fn encode(h: &HeaderFields, len: usize) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(len);
    let mut bw = BitWriter::endian(&mut buffer, BigEndian);

    bw.write(6, h.version).unwrap();
    bw.write(36, h.created).unwrap();
    bw.write(36, h.last_updated).unwrap();
    bw.write(12, h.cmp_id).unwrap();
    bw.write(12, h.cmp_version).unwrap();
    bw.write(6, h.consent_screen).unwrap();
    bw.write(6, h.consent_language[0] - b'A').unwrap();
    bw.write(6, h.consent_language[1] - b'A').unwrap();
    bw.write(12, h.vendor_list_version).unwrap();
    // policy version, service flags and special features
    bw.write(20, 0u32).unwrap();
    bw.write(24, h.purposes).unwrap();
    // legitimate interests, one treatment and publisher country
    bw.write(37, 0u64).unwrap();
    bw.write(16, h.max_vendor_id).unwrap();
    bw.byte_align().unwrap();
    drop(bw);

    buffer.resize(len, 0);
    buffer
}

