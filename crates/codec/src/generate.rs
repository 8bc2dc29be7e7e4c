//! Random identifier generation.
//!
//! Generation goes through an [`EntropySource`]. Which source backs [`generate`] is fixed at
//! build time by [`DefaultSource`]:
//!
//! - Linux and Windows: [`RandomUuid`], a random-variant UUID in the style of the platform's own
//!   UUID facility (`uuid_generate_random`, `CoCreateGuid`).
//! - Everything else: [`OsRandom`], 16 raw bytes from the operating system.
//!
//! Both yield 16 bytes that callers treat as opaque. Collision resistance is the concern here,
//! not secrecy, but both sources read the OS CSPRNG anyway.

use crate::{Octets, OCTETS_LEN};
use rand::rngs::OsRng;
use rand::RngCore;

/// The entropy source could not produce an identifier.
#[derive(Debug, thiserror::Error)]
#[error("failed to generate a random UUID")]
pub struct GenerationError(#[source] rand::Error);

impl From<rand::Error> for GenerationError {
    fn from(err: rand::Error) -> Self {
        Self(err)
    }
}

/// Something that can produce a fresh 16-byte identifier.
pub trait EntropySource {
    /// Produces one identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the underlying source is unavailable.
    fn produce(&self) -> Result<Octets, GenerationError>;
}

/// Raw bytes from the operating system's random number generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl EntropySource for OsRandom {
    fn produce(&self) -> Result<Octets, GenerationError> {
        let mut bytes = [0u8; OCTETS_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Octets::from_bytes(bytes))
    }
}

/// An RFC 4122 random UUID (version 4, variant 10) built from OS randomness.
///
/// Six of the 128 bits are fixed by the version and variant; the remainder are random.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomUuid;

impl EntropySource for RandomUuid {
    fn produce(&self) -> Result<Octets, GenerationError> {
        let random = OsRandom.produce()?;
        let uuid = uuid::Builder::from_random_bytes(random.into_bytes()).into_uuid();
        Ok(Octets::from_bytes(uuid.into_bytes()))
    }
}

/// Source used by [`generate`] on this target.
#[cfg(any(target_os = "linux", windows))]
pub type DefaultSource = RandomUuid;

/// Source used by [`generate`] on this target.
#[cfg(not(any(target_os = "linux", windows)))]
pub type DefaultSource = OsRandom;

/// Generates a fresh identifier from the platform's [`DefaultSource`].
///
/// # Errors
///
/// Returns [`GenerationError`] if the entropy source is unavailable.
pub fn generate() -> Result<Octets, GenerationError> {
    generate_with(&DefaultSource::default())
}

/// Generates a fresh identifier from an explicit source.
///
/// # Errors
///
/// Propagates the source's [`GenerationError`].
pub fn generate_with<S: EntropySource + ?Sized>(source: &S) -> Result<Octets, GenerationError> {
    source.produce()
}
