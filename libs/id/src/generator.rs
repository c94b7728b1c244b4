//! Prefixed identifier generation.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::{Alphabet, Codec, Entropy, IdError, PrefixTable, SEPARATOR};

/// Default number of random bytes per identifier.
pub const DEFAULT_SIZE: usize = 16;

/// Generates identifiers of the form `{prefix}_{encoded random bytes}`.
///
/// All state is fixed at construction, so a generator can be shared across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct IdGenerator<K> {
    prefixes: PrefixTable<K>,
    codec: Codec,
    entropy: Entropy,
    size: usize,
}

impl<K> IdGenerator<K>
where
    K: Eq + Hash + fmt::Display,
{
    /// Starts building a generator over `prefixes`.
    pub fn builder(prefixes: PrefixTable<K>) -> IdGeneratorBuilder<K> {
        IdGeneratorBuilder::new(prefixes)
    }

    /// Generates an identifier of `kind` with the default size.
    pub fn generate<Q>(&self, kind: &Q) -> Result<String, IdError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + fmt::Display + ?Sized,
    {
        self.generate_with_size(kind, self.size)
    }

    /// Generates an identifier of `kind` from `size` random bytes.
    pub fn generate_with_size<Q>(&self, kind: &Q, size: usize) -> Result<String, IdError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + fmt::Display + ?Sized,
    {
        let prefix = self
            .prefixes
            .get(kind)
            .ok_or_else(|| IdError::UnknownKind(kind.to_string()))?;

        if size == 0 {
            return Err(IdError::ZeroSize);
        }

        let bytes = self.entropy.random_bytes(size)?;
        let encoded = self.codec.encode(&bytes);

        let mut id = String::with_capacity(prefix.len() + 1 + encoded.len());
        id.push_str(prefix);
        id.push(SEPARATOR);
        id.push_str(&encoded);

        trace!(kind = %kind, size, "generated id");
        Ok(id)
    }

    /// Returns the prefix for `kind`.
    pub fn prefix<Q>(&self, kind: &Q) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.prefixes.get(kind)
    }

    /// Returns the prefix table.
    pub fn prefixes(&self) -> &PrefixTable<K> {
        &self.prefixes
    }

    /// Returns the codec used for suffixes.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Returns the default number of random bytes per identifier.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Builder for [`IdGenerator`].
#[derive(Debug)]
pub struct IdGeneratorBuilder<K> {
    prefixes: PrefixTable<K>,
    alphabet: Option<String>,
    size: usize,
    entropy: Option<Entropy>,
}

impl<K> IdGeneratorBuilder<K>
where
    K: Eq + Hash + fmt::Display,
{
    fn new(prefixes: PrefixTable<K>) -> Self {
        Self {
            prefixes,
            alphabet: None,
            size: DEFAULT_SIZE,
            entropy: None,
        }
    }

    /// Overrides the default alphabet.
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Sets the default number of random bytes per identifier.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the entropy source.
    pub fn entropy(mut self, entropy: Entropy) -> Self {
        self.entropy = Some(entropy);
        self
    }

    /// Validates the configuration and builds the generator.
    pub fn build(self) -> Result<IdGenerator<K>, IdError> {
        let alphabet = match self.alphabet {
            Some(symbols) => Alphabet::new(&symbols)?,
            None => Alphabet::default(),
        };

        if self.size == 0 {
            return Err(IdError::ZeroSize);
        }

        let entropy = self.entropy.ok_or(IdError::MissingEntropySource)?;
        let codec = Codec::new(alphabet);

        debug!(
            base = codec.alphabet().base(),
            size = self.size,
            kinds = self.prefixes.len(),
            entropy = ?entropy,
            "id generator ready"
        );

        Ok(IdGenerator {
            prefixes: self.prefixes,
            codec,
            entropy,
            size: self.size,
        })
    }
}
