//! Decoding of the metadata header shared by all TCF v2 consent string variants.
//!
//! The header is validated once, by [`ConsentMetadata::parse`]. A [`ConsentMetadata`] can not be
//! built any other way, which is what allows its accessors to be infallible.
//!
//! ```
//! use iab_tcf_metadata::metadata::{ConsentMetadata, MetadataError};
//!
//! let r = ConsentMetadata::parse(&[0; 12]);
//!
//! assert!(matches!(r, Err(MetadataError::TooShort { required: 30, actual: 12 })));
//! ```
use crate::core::timestamp::Timestamp;
use crate::core::{read_bool, read_fixed_integer};
use crate::metadata::language::ConsentLanguage;
use crate::metadata::layout::{Field, LANGUAGE_LETTER_WIDTH};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use thiserror::Error;

pub mod language;
pub mod layout;

/// Minimum length in bytes of a consent string holding a complete header.
pub const MIN_LENGTH: usize = 30;

/// Purpose ids which have a consent bit in the header.
pub const PURPOSE_IDS: RangeInclusive<u8> = 1..=24;

pub type PurposeSet = BTreeSet<u8>;

/// The error type for metadata header decoding.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum MetadataError {
    /// The buffer is too short to hold the header.
    #[error("vendor consent strings are at least {required} bytes long, this one was {actual}")]
    TooShort { required: usize, actual: usize },
    /// The header declares no vendors.
    #[error("invalid MaxVendorID {value} (must be greater than or equal to 1)")]
    InvalidMaxVendorId { value: u16 },
    /// The header has a zero version.
    #[error("invalid Version {value} (must be greater than or equal to 1)")]
    InvalidVersion { value: u8 },
    /// The header refers to vendor list version 0, which does not exist.
    #[error("invalid VendorListVersion 0 (must be greater than or equal to 1)")]
    InvalidVendorListVersion,
}

impl MetadataError {
    /// Returns true if the buffer could not hold a header at all, false if the header holds a
    /// forbidden value.
    pub fn is_structural(&self) -> bool {
        matches!(self, MetadataError::TooShort { .. })
    }
}

/// A read-only view over the metadata header of a consent string.
///
/// The view borrows the validated buffer and decodes every field on access.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConsentMetadata<'a> {
    data: &'a [u8],
}

impl<'a> ConsentMetadata<'a> {
    /// Validates the header of `data` and returns a view over it.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::TooShort`] if `data` is shorter than [`MIN_LENGTH`], or one of
    /// the `Invalid*` variants if the header holds a value which must not be zero.
    pub fn parse(data: &'a [u8]) -> Result<Self, MetadataError> {
        Self::validate(data)
            .inspect(|m| {
                trace!(
                    "parsed consent metadata: version {}, cmp {}, {} bytes",
                    m.version(),
                    m.cmp_id(),
                    data.len()
                )
            })
            .inspect_err(|e| debug!("rejected consent metadata: {e}"))
    }

    fn validate(data: &'a [u8]) -> Result<Self, MetadataError> {
        if data.len() < MIN_LENGTH {
            return Err(MetadataError::TooShort {
                required: MIN_LENGTH,
                actual: data.len(),
            });
        }

        let metadata = Self { data };

        let max_vendor_id = metadata.max_vendor_id();
        if max_vendor_id < 1 {
            return Err(MetadataError::InvalidMaxVendorId {
                value: max_vendor_id,
            });
        }

        let version = metadata.version();
        if version < 1 {
            return Err(MetadataError::InvalidVersion { value: version });
        }

        if metadata.vendor_list_version() == 0 {
            return Err(MetadataError::InvalidVendorListVersion);
        }

        Ok(metadata)
    }

    /// The whole validated buffer, including the bytes following the header.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Raw value of a header field.
    ///
    /// `ConsentLanguage` and `PurposesAllowed` are returned as their packed bits.
    pub fn field(&self, field: Field) -> u64 {
        let l = field.layout();
        self.read(l.offset, l.width)
    }

    fn read(&self, offset: u32, width: u32) -> u64 {
        // all layouts end within MIN_LENGTH, which parse has checked
        read_fixed_integer(self.data, offset, width).expect("header field within validated buffer")
    }

    pub fn version(&self) -> u8 {
        self.field(Field::Version) as u8
    }

    pub fn created(&self) -> Timestamp {
        Timestamp::from_deciseconds(self.field(Field::Created) as i64)
    }

    pub fn last_updated(&self) -> Timestamp {
        Timestamp::from_deciseconds(self.field(Field::LastUpdated) as i64)
    }

    pub fn cmp_id(&self) -> u16 {
        self.field(Field::CmpId) as u16
    }

    pub fn cmp_version(&self) -> u16 {
        self.field(Field::CmpVersion) as u16
    }

    pub fn consent_screen(&self) -> u8 {
        self.field(Field::ConsentScreen) as u8
    }

    pub fn consent_language(&self) -> ConsentLanguage {
        let offset = Field::ConsentLanguage.layout().offset;
        let first = self.read(offset, LANGUAGE_LETTER_WIDTH) as u8;
        let second = self.read(offset + LANGUAGE_LETTER_WIDTH, LANGUAGE_LETTER_WIDTH) as u8;
        ConsentLanguage::from_indices(first, second)
    }

    pub fn vendor_list_version(&self) -> u16 {
        self.field(Field::VendorListVersion) as u16
    }

    /// Highest vendor id covered by the vendor consent section that follows the header.
    pub fn max_vendor_id(&self) -> u16 {
        self.field(Field::MaxVendorId) as u16
    }

    /// Returns true if the user consented to purpose `id`.
    ///
    /// Only ids in [`PURPOSE_IDS`] have a consent bit; any other id is reported as not allowed.
    pub fn purpose_allowed(&self, id: u8) -> bool {
        if !PURPOSE_IDS.contains(&id) {
            return false;
        }
        // purpose 1 is the first bit of the field
        let offset = Field::PurposesAllowed.layout().offset + u32::from(id) - 1;
        read_bool(self.data, offset).expect("purpose bit within validated buffer")
    }

    /// All purposes the user consented to.
    pub fn purposes_allowed(&self) -> PurposeSet {
        PURPOSE_IDS.filter(|&id| self.purpose_allowed(id)).collect()
    }

    /// Decodes every header field into an owned [`Metadata`].
    pub fn to_metadata(&self) -> Metadata {
        Metadata {
            version: self.version(),
            created: self.created(),
            last_updated: self.last_updated(),
            cmp_id: self.cmp_id(),
            cmp_version: self.cmp_version(),
            consent_screen: self.consent_screen(),
            consent_language: self.consent_language(),
            vendor_list_version: self.vendor_list_version(),
            purposes_allowed: self.purposes_allowed(),
            max_vendor_id: self.max_vendor_id(),
        }
    }
}

impl<'a> TryFrom<&'a [u8]> for ConsentMetadata<'a> {
    type Error = MetadataError;

    fn try_from(data: &'a [u8]) -> Result<Self, Self::Error> {
        Self::parse(data)
    }
}

/// Shorthand for [`ConsentMetadata::parse`].
pub fn parse(data: &[u8]) -> Result<ConsentMetadata<'_>, MetadataError> {
    ConsentMetadata::parse(data)
}

/// Owned copy of all metadata header fields.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metadata {
    pub version: u8,
    pub created: Timestamp,
    pub last_updated: Timestamp,
    pub cmp_id: u16,
    pub cmp_version: u16,
    pub consent_screen: u8,
    pub consent_language: ConsentLanguage,
    pub vendor_list_version: u16,
    pub purposes_allowed: PurposeSet,
    pub max_vendor_id: u16,
}

impl From<ConsentMetadata<'_>> for Metadata {
    fn from(m: ConsentMetadata<'_>) -> Self {
        m.to_metadata()
    }
}
