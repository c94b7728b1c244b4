//! # pfx-id
//!
//! Short, human-readable, prefixed random identifiers.
//!
//! ## ID Format
//!
//! Identifiers use the format `{prefix}_{suffix}`, where the suffix is a
//! buffer of cryptographically secure random bytes rewritten in a
//! caller-chosen alphabet.
//!
//! Examples:
//! - `u_8fK3mZqW1RxHn7VbYt2dPa`
//! - `cus_11NVSVezva3bAQdzTQGD`
//!
//! With the default 58-symbol alphabet and 16 random bytes, suffixes are
//! about 22 characters long.
//!
//! ## Uniqueness
//!
//! The generator only supplies entropy. It does not store, index or
//! deduplicate what it produces; collision probability is governed by the
//! byte size alone.
//!
//! ## Example
//!
//! ```
//! use pfx_id::{Entropy, IdGenerator, PrefixTable};
//!
//! let prefixes = PrefixTable::new([("user".to_string(), "u")])?;
//! let generator = IdGenerator::builder(prefixes)
//!     .entropy(Entropy::os())
//!     .build()?;
//!
//! let id = generator.generate("user")?;
//! assert!(id.starts_with("u_"));
//! # Ok::<(), pfx_id::IdError>(())
//! ```

mod alphabet;
mod codec;
mod config;
mod entropy;
mod error;
mod generator;
mod macros;
mod prefix;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET, MAX_BASE};
pub use codec::Codec;
pub use config::GeneratorConfig;
pub use entropy::{AllocEntropy, Entropy, FillEntropy, OsEntropy, ThreadRngEntropy};
pub use error::{EntropyError, IdError};
pub use generator::{IdGenerator, IdGeneratorBuilder, DEFAULT_SIZE};
pub use prefix::{IdKind, PrefixTable, SEPARATOR};

/// Re-export serde for [`define_kinds!`].
#[doc(hidden)]
pub use serde;
