//! Canonical UUID codec and random identifier generator.
//!
//! Identifiers are handled as an opaque 16-byte buffer ([`Octets`]) and exchanged with the
//! outside world in the canonical hyphenated string form:
//!
//! ```text
//! xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
//! ```
//!
//! ## Canonical string form
//! - Length: 36
//! - 32 hexadecimal digits in groups of 8-4-4-4-12, hyphens at offsets 8, 13, 18 and 23
//! - Lowercase on output, either case accepted on input
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! The string holds the bytes in order, high nibble first, so the example above decodes to
//! `55 0e 84 00 e2 9b 41 d4 a7 16 44 66 55 44 00 00`.
//!
//! This crate provides:
//! - [`encode`] / [`decode`]: conversion between [`Octets`] and the canonical string.
//! - [`generate`]: fresh random identifiers from the platform's preferred [`EntropySource`].
//! - [`Guid`]: conversion from the native GUID field layout into wire order.
//! - [`functions`]: argument-checked entry points for a binding layer that only has untyped
//!   byte arguments to hand over.
//!
//! All operations are pure apart from the entropy read in [`generate`]; nothing is cached or
//! shared between calls.

mod decode;
mod encode;
pub mod functions;
mod generate;
mod guid;
mod octets;

pub use decode::{decode, decode_bytes, ParseError};
pub use encode::{encode, encode_into};
pub use generate::{
    generate, generate_with, DefaultSource, EntropySource, GenerationError, OsRandom, RandomUuid,
};
pub use guid::Guid;
pub use octets::Octets;

/// Number of bytes in an identifier.
pub const OCTETS_LEN: usize = 16;

/// Number of characters in the canonical string form.
pub const TEXT_LEN: usize = 36;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Canonical string could not be decoded
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No identifier could be generated
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Raw input was not the size of an identifier
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
