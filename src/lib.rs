//! This crate decodes the metadata header of IAB
//! [TCF v2](https://github.com/InteractiveAdvertisingBureau/GDPR-Transparency-and-Consent-Framework)
//! consent strings.
//!
//! The header is the fixed-position leading part of a consent string, shared by the bitfield and
//! range encodings of the vendor consent section which follows it. Decoding the vendor section
//! itself is left to the caller, which gets access to the validated bytes through
//! [`ConsentMetadata::as_bytes`].
//!
//! NOTE: This is not an official IAB library.
//!
//! # Parsing a header
//!
//! Input is the raw byte form of the consent string, after base64url decoding.
//!
//! ```
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use iab_tcf_metadata::ConsentMetadata;
//!
//! // "COvFyGBOvFyGBAbAAAENAPCAAOAAAAAAAAAAAEEUACCKAAA"
//! let bytes = [
//!     0x08, 0xeb, 0xc5, 0xc8, 0x60, 0x4e, 0xbc, 0x5c, 0x86, 0x04, 0x06, 0xc0, 0x00, 0x01, 0x0d,
//!     0x00, 0xf0, 0x80, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x41, 0x14,
//!     0x00, 0x20, 0x8a, 0x00, 0x00,
//! ];
//! let metadata = ConsentMetadata::parse(&bytes)?;
//!
//! assert_eq!(metadata.version(), 2);
//! assert_eq!(metadata.cmp_id(), 27);
//! assert_eq!(metadata.consent_language(), "EN");
//! assert_eq!(metadata.created().seconds(), 1582243059);
//! assert!(metadata.purpose_allowed(1));
//! # Ok(())
//! # }
//! ```
//!
//! # Error handling
//!
//! [`ConsentMetadata::parse`] is the only way to build a [`ConsentMetadata`]. It returns a
//! [`MetadataError`] if the buffer is shorter than [`MIN_LENGTH`] bytes, or if one of the version,
//! vendor list version or max vendor id fields is zero. Once parsed, all accessors are infallible.
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for the owned [`Metadata`] snapshot.

pub mod core;
pub mod metadata;

pub use crate::core::timestamp::Timestamp;
pub use crate::metadata::language::ConsentLanguage;
pub use crate::metadata::layout::{Field, FieldLayout};
pub use crate::metadata::{
    parse, ConsentMetadata, Metadata, MetadataError, PurposeSet, MIN_LENGTH, PURPOSE_IDS,
};
