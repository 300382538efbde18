#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-letter consent language code.
///
/// Each letter is stored as a 6-bit index where 0 is `A` and 25 is `Z`. Indices above 25 are not
/// letters; they are kept as the character at the same distance from `A` so that the raw value
/// can still be inspected. Use [`ConsentLanguage::is_alphabetic`] to reject such codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsentLanguage([char; 2]);

impl ConsentLanguage {
    pub(crate) fn from_indices(first: u8, second: u8) -> Self {
        Self([letter(first), letter(second)])
    }

    pub fn letters(&self) -> [char; 2] {
        self.0
    }

    /// Returns true if both letters are in the range `A..=Z`.
    pub fn is_alphabetic(&self) -> bool {
        self.0.iter().all(char::is_ascii_uppercase)
    }
}

fn letter(index: u8) -> char {
    // 6-bit indices never go past 'A' + 63
    char::from(b'A' + (index & 0x3f))
}

impl fmt::Display for ConsentLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl PartialEq<&str> for ConsentLanguage {
    fn eq(&self, other: &&str) -> bool {
        other.chars().eq(self.0)
    }
}
