use crate::{Octets, TEXT_LEN};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Byte indices after which a hyphen follows (8-4-4-4-12 grouping).
const HYPHEN_AFTER: [usize; 4] = [3, 5, 7, 9];

/// Writes the canonical form of `octets` into `out` as ASCII.
pub fn encode_into(octets: &Octets, out: &mut [u8; TEXT_LEN]) {
    let mut pos = 0;
    for (i, &byte) in octets.as_bytes().iter().enumerate() {
        out[pos] = HEX_DIGITS[usize::from(byte >> 4)];
        out[pos + 1] = HEX_DIGITS[usize::from(byte & 0x0f)];
        pos += 2;

        if HYPHEN_AFTER.contains(&i) {
            out[pos] = b'-';
            pos += 1;
        }
    }
    debug_assert_eq!(pos, TEXT_LEN);
}

/// Renders `octets` as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` in lowercase hex.
///
/// Total: every 16-byte input has exactly one 36-character rendering.
pub fn encode(octets: &Octets) -> String {
    let mut buf = [0u8; TEXT_LEN];
    encode_into(octets, &mut buf);
    buf.iter().map(|&b| char::from(b)).collect()
}
