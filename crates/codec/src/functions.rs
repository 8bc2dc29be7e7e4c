//! Argument-checked entry points.
//!
//! A binding layer usually only knows that it received "some bytes". These functions take such
//! untyped arguments, check their size, and report failures with short messages suitable for
//! passing straight back to an end user:
//!
//! | Function | Argument | Result |
//! |---|---|---|
//! | [`uuidgen`] | none | 16 random bytes |
//! | [`uuid`] | 16 bytes | canonical string |
//! | [`xuuid`] | 36 bytes of text | 16 bytes |

use crate::{decode_bytes, encode, generate, Octets, OCTETS_LEN, TEXT_LEN};

/// Errors returned by the entry points.
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    #[error("argument has to be a {expected} byte object")]
    ArgumentSize { expected: usize, actual: usize },

    #[error("UUID parse error")]
    Parse(#[source] crate::ParseError),

    #[error("failed to generate a random UUID")]
    Generation(#[source] crate::GenerationError),
}

/// Generates a random identifier.
pub fn uuidgen() -> Result<Octets, FunctionError> {
    generate().map_err(|e| {
        tracing::debug!(error = %e, "uuidgen failed");
        FunctionError::Generation(e)
    })
}

/// Renders a 16-byte argument as a canonical string.
pub fn uuid(arg: &[u8]) -> Result<String, FunctionError> {
    let octets = Octets::try_from(arg).map_err(|_| {
        tracing::debug!(len = arg.len(), "uuid called with wrong argument size");
        FunctionError::ArgumentSize {
            expected: OCTETS_LEN,
            actual: arg.len(),
        }
    })?;
    Ok(encode(&octets))
}

/// Parses a 36-byte canonical string argument into 16 bytes.
pub fn xuuid(arg: &[u8]) -> Result<Octets, FunctionError> {
    if arg.len() != TEXT_LEN {
        tracing::debug!(len = arg.len(), "xuuid called with wrong argument size");
        return Err(FunctionError::ArgumentSize {
            expected: TEXT_LEN,
            actual: arg.len(),
        });
    }

    decode_bytes(arg).map_err(|e| {
        tracing::debug!(error = %e, "xuuid failed to parse argument");
        FunctionError::Parse(e)
    })
}
