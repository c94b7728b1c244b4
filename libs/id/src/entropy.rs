//! Sources of cryptographically secure random bytes.
//!
//! A source exposes one of two shapes: it either fills a caller-provided
//! buffer ([`FillEntropy`]) or hands back a freshly allocated one
//! ([`AllocEntropy`]). [`Entropy`] captures which shape is in use once, at
//! construction, and normalizes both to a byte vector.

use std::fmt;
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

use crate::{EntropyError, IdError};

/// A source that fills a buffer in place.
pub trait FillEntropy: Send + Sync {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// A source that returns a newly allocated buffer.
pub trait AllocEntropy: Send + Sync {
    /// Returns exactly `len` random bytes.
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, EntropyError>;
}

/// An entropy source with its call shape resolved.
#[derive(Clone)]
pub enum Entropy {
    /// Fills a buffer owned by the generator.
    Fill(Arc<dyn FillEntropy>),
    /// Allocates and returns its own buffer.
    Alloc(Arc<dyn AllocEntropy>),
}

impl Entropy {
    /// Wraps a fill-shaped source.
    pub fn fill(source: impl FillEntropy + 'static) -> Self {
        Self::Fill(Arc::new(source))
    }

    /// Wraps an alloc-shaped source.
    pub fn alloc(source: impl AllocEntropy + 'static) -> Self {
        Self::Alloc(Arc::new(source))
    }

    /// The operating system's random number generator.
    pub fn os() -> Self {
        Self::fill(OsEntropy)
    }

    /// The thread-local CSPRNG, seeded from the operating system.
    pub fn thread_rng() -> Self {
        Self::alloc(ThreadRngEntropy)
    }

    /// Obtains `len` random bytes from the source.
    pub fn random_bytes(&self, len: usize) -> Result<Vec<u8>, IdError> {
        match self {
            Entropy::Fill(source) => {
                let mut buf = vec![0u8; len];
                source.fill_bytes(&mut buf)?;
                Ok(buf)
            }
            Entropy::Alloc(source) => {
                let buf = source.random_bytes(len)?;
                if buf.len() != len {
                    return Err(IdError::EntropyUnavailable(format!(
                        "source returned {} bytes, expected {}",
                        buf.len(),
                        len
                    )));
                }
                Ok(buf)
            }
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            Entropy::Fill(_) => "fill",
            Entropy::Alloc(_) => "alloc",
        }
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entropy").field(&self.shape()).finish()
    }
}

/// Reads from the operating system's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl FillEntropy for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::new(format!("os random source: {e}")))
    }
}

/// Draws from `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngEntropy;

impl AllocEntropy for ThreadRngEntropy {
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
        let mut bytes = vec![0u8; len];
        rand::rng().fill_bytes(&mut bytes);
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Short;

    impl AllocEntropy for Short {
        fn random_bytes(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
            Ok(vec![1; len.saturating_sub(1)])
        }
    }

    struct Broken;

    impl FillEntropy for Broken {
        fn fill_bytes(&self, _dest: &mut [u8]) -> Result<(), EntropyError> {
            Err(EntropyError::new("device unplugged"))
        }
    }

    #[test]
    fn test_os_entropy_len() {
        let bytes = Entropy::os().random_bytes(32).unwrap();
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_thread_rng_len() {
        let bytes = Entropy::thread_rng().random_bytes(16).unwrap();
        assert_eq!(bytes.len(), 16);
    }

    #[test]
    fn test_os_entropy_varies() {
        let a = Entropy::os().random_bytes(16).unwrap();
        let b = Entropy::os().random_bytes(16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_alloc_rejected() {
        let err = Entropy::alloc(Short).random_bytes(8).unwrap_err();
        assert!(err.is_entropy());
        assert_eq!(
            err,
            IdError::EntropyUnavailable("source returned 7 bytes, expected 8".into())
        );
    }

    #[test]
    fn test_fill_failure_surfaces() {
        let err = Entropy::fill(Broken).random_bytes(8).unwrap_err();
        assert_eq!(err, IdError::EntropyUnavailable("device unplugged".into()));
    }

    #[test]
    fn test_debug_shows_shape() {
        assert_eq!(format!("{:?}", Entropy::os()), "Entropy(\"fill\")");
        assert_eq!(format!("{:?}", Entropy::thread_rng()), "Entropy(\"alloc\")");
    }
}
