//! Bit layout of the consent string metadata header.
//!
//! Every header field lives at a fixed position. Offsets are counted in bits from the most
//! significant bit of the first byte.

use crate::metadata::MIN_LENGTH;
use strum_macros::Display;

/// Position and size of a field within the header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldLayout {
    pub offset: u32,
    pub width: u32,
}

impl FieldLayout {
    const fn new(offset: u32, width: u32) -> Self {
        Self { offset, width }
    }

    /// First bit past the end of the field.
    pub const fn end(&self) -> u32 {
        self.offset + self.width
    }
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash)]
pub enum Field {
    Version,
    Created,
    LastUpdated,
    CmpId,
    CmpVersion,
    ConsentScreen,
    ConsentLanguage,
    VendorListVersion,
    PurposesAllowed,
    MaxVendorId,
}

impl Field {
    /// All fields, in bit order.
    pub const ALL: [Field; 10] = [
        Field::Version,
        Field::Created,
        Field::LastUpdated,
        Field::CmpId,
        Field::CmpVersion,
        Field::ConsentScreen,
        Field::ConsentLanguage,
        Field::VendorListVersion,
        Field::PurposesAllowed,
        Field::MaxVendorId,
    ];

    pub const fn layout(self) -> FieldLayout {
        match self {
            Field::Version => FieldLayout::new(0, 6),
            Field::Created => FieldLayout::new(6, 36),
            Field::LastUpdated => FieldLayout::new(42, 36),
            Field::CmpId => FieldLayout::new(78, 12),
            Field::CmpVersion => FieldLayout::new(90, 12),
            Field::ConsentScreen => FieldLayout::new(102, 6),
            // two letters, 6 bits each
            Field::ConsentLanguage => FieldLayout::new(108, 12),
            Field::VendorListVersion => FieldLayout::new(120, 12),
            // one bit per purpose, purpose 1 first
            Field::PurposesAllowed => FieldLayout::new(152, 24),
            Field::MaxVendorId => FieldLayout::new(213, 16),
        }
    }
}

/// Width of a single consent language letter.
pub(crate) const LANGUAGE_LETTER_WIDTH: u32 = 6;

const fn fits_in_header() -> bool {
    let mut i = 0;
    while i < Field::ALL.len() {
        if Field::ALL[i].layout().end() as usize > MIN_LENGTH * 8 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(fits_in_header(), "header field ends past the minimum length");
