//! The 16-byte identifier buffer.

use crate::{decode, encode, ParseError, UuidError, OCTETS_LEN};
use std::{fmt, str::FromStr};

/// A 16-byte identifier with no internal structure.
///
/// No version, variant or clock fields are interpreted; the bytes are whatever the caller or
/// the generator put there.
///
/// # Display format
/// When displayed or converted to string, `Octets` always produces the canonical
/// 36-character lowercase hyphenated form.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octets([u8; OCTETS_LEN]);

impl Octets {
    /// Wraps 16 raw bytes.
    pub const fn from_bytes(bytes: [u8; OCTETS_LEN]) -> Self {
        Self(bytes)
    }

    /// The all-zero identifier.
    pub const fn nil() -> Self {
        Self([0; OCTETS_LEN])
    }

    pub fn as_bytes(&self) -> &[u8; OCTETS_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; OCTETS_LEN] {
        self.0
    }
}

impl From<[u8; OCTETS_LEN]> for Octets {
    fn from(bytes: [u8; OCTETS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Octets> for [u8; OCTETS_LEN] {
    fn from(octets: Octets) -> Self {
        octets.0
    }
}

impl TryFrom<&[u8]> for Octets {
    type Error = UuidError;

    /// Copies a slice that must be exactly 16 bytes long.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidLength`] for any other length.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; OCTETS_LEN] = bytes.try_into().map_err(|_| UuidError::InvalidLength {
            expected: OCTETS_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Octets {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl fmt::Debug for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Octets").field(&encode(self)).finish()
    }
}

impl FromStr for Octets {
    type Err = ParseError;

    /// Parses a canonical string. This is equivalent to calling [`decode`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Octets {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&encode(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Octets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 16] = [
        0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44, 0x00,
        0x00,
    ];

    #[test]
    fn test_try_from_slice_of_sixteen() {
        let octets = Octets::try_from(&SAMPLE[..]).unwrap();
        assert_eq!(octets.as_bytes(), &SAMPLE);
    }

    #[test]
    fn test_try_from_slice_wrong_length() {
        let result = Octets::try_from(&SAMPLE[..15]);

        match result {
            Err(UuidError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("Expected InvalidLength error, got {:?}", other),
        }

        assert!(Octets::try_from(&[0u8; 17][..]).is_err());
        assert!(Octets::try_from(&[0u8; 0][..]).is_err());
    }

    #[test]
    fn test_nil_is_default() {
        assert_eq!(Octets::nil(), Octets::default());
        assert_eq!(Octets::nil().into_bytes(), [0u8; 16]);
    }

    #[test]
    fn test_display_and_from_str() {
        let octets = Octets::from(SAMPLE);
        let displayed = octets.to_string();
        assert_eq!(displayed, "550e8400-e29b-41d4-a716-446655440000");

        let parsed: Octets = displayed.parse().unwrap();
        assert_eq!(parsed, octets);
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", Octets::from(SAMPLE));
        assert_eq!(debug, "Octets(\"550e8400-e29b-41d4-a716-446655440000\")");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_string() {
        let octets = Octets::from(SAMPLE);
        let json = serde_json::to_string(&octets).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");

        let back: Octets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, octets);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_malformed_string() {
        let result: Result<Octets, _> =
            serde_json::from_str("\"550e8400e29b41d4a716446655440000\"");
        assert!(result.is_err());
    }
}
