//! Native GUID layout.
//!
//! Platform GUID APIs hand back a struct of `u32, u16, u16, [u8; 8]`. On little-endian targets
//! the first three fields sit in memory byte-reversed relative to the wire order used by the
//! canonical string, so a GUID cannot simply be reinterpreted as [`Octets`].

use crate::Octets;

/// A GUID in native field form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// Reads a GUID from its in-memory representation on a little-endian platform.
    pub fn from_bytes_le(bytes: [u8; 16]) -> Self {
        let [a0, a1, a2, a3, b0, b1, c0, c1, d @ ..] = bytes;
        Self {
            data1: u32::from_le_bytes([a0, a1, a2, a3]),
            data2: u16::from_le_bytes([b0, b1]),
            data3: u16::from_le_bytes([c0, c1]),
            data4: d,
        }
    }

    /// The in-memory representation on a little-endian platform.
    pub fn to_bytes_le(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.data1.to_le_bytes());
        out[4..6].copy_from_slice(&self.data2.to_le_bytes());
        out[6..8].copy_from_slice(&self.data3.to_le_bytes());
        out[8..].copy_from_slice(&self.data4);
        out
    }
}

impl From<Guid> for Octets {
    /// Fields 1-3 go out big-endian; `data4` is copied as is.
    fn from(guid: Guid) -> Self {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&guid.data1.to_be_bytes());
        out[4..6].copy_from_slice(&guid.data2.to_be_bytes());
        out[6..8].copy_from_slice(&guid.data3.to_be_bytes());
        out[8..].copy_from_slice(&guid.data4);
        Octets::from_bytes(out)
    }
}

impl From<Octets> for Guid {
    fn from(octets: Octets) -> Self {
        let [a0, a1, a2, a3, b0, b1, c0, c1, d @ ..] = octets.into_bytes();
        Self {
            data1: u32::from_be_bytes([a0, a1, a2, a3]),
            data2: u16::from_be_bytes([b0, b1]),
            data3: u16::from_be_bytes([c0, c1]),
            data4: d,
        }
    }
}
