use crate::{Octets, OCTETS_LEN, TEXT_LEN};

/// Why a string is not a canonical UUID.
///
/// Every variant carries the offset of the offending input byte so callers can point at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is not 36 bytes long
    #[error("UUID must be 36 characters long, got {len}")]
    InvalidLength { len: usize },

    /// A digit position holds something other than `0-9`, `a-f` or `A-F`
    #[error("invalid hex digit {found:?} at offset {index}")]
    InvalidHexDigit { index: usize, found: char },

    /// A separator position holds something other than `-`
    #[error("expected '-' at offset {index}, found {found:?}")]
    MissingHyphen { index: usize, found: char },
}

/// Number of bytes in each hyphen-separated group.
const GROUPS: [usize; 5] = [4, 2, 2, 2, 6];

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a canonical string such as `550e8400-e29b-41d4-a716-446655440000`.
///
/// Hex digits are accepted in either case.
///
/// # Errors
///
/// Returns [`ParseError`] for the first byte that breaks the layout; see [`decode_bytes`].
pub fn decode(text: &str) -> Result<Octets, ParseError> {
    decode_bytes(text.as_bytes())
}

/// Parses the canonical form from raw bytes that are not known to be UTF-8.
///
/// # Errors
///
/// - [`ParseError::InvalidLength`] if `text` is not exactly 36 bytes.
/// - [`ParseError::InvalidHexDigit`] if a digit position is not a hex digit.
/// - [`ParseError::MissingHyphen`] if offset 8, 13, 18 or 23 is not `-`.
pub fn decode_bytes(text: &[u8]) -> Result<Octets, ParseError> {
    if text.len() != TEXT_LEN {
        return Err(ParseError::InvalidLength { len: text.len() });
    }

    let mut out = [0u8; OCTETS_LEN];
    let mut k = 0;
    let mut pos = 0;

    for (g, &group) in GROUPS.iter().enumerate() {
        if g > 0 {
            if text[pos] != b'-' {
                return Err(ParseError::MissingHyphen {
                    index: pos,
                    found: char::from(text[pos]),
                });
            }
            pos += 1;
        }

        for _ in 0..group {
            let hi = digit_at(text, pos)?;
            let lo = digit_at(text, pos + 1)?;
            out[k] = (hi << 4) | lo;
            k += 1;
            pos += 2;
        }
    }

    Ok(Octets::from_bytes(out))
}

fn digit_at(text: &[u8], index: usize) -> Result<u8, ParseError> {
    hex_value(text[index]).ok_or(ParseError::InvalidHexDigit {
        index,
        found: char::from(text[index]),
    })
}
