//! Identifier kinds and their prefixes.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::IdError;

/// Separates the prefix from the encoded suffix.
pub const SEPARATOR: char = '_';

/// A closed set of identifier kinds.
///
/// Usually implemented with [`define_kinds!`](crate::define_kinds).
pub trait IdKind: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Every kind in the set.
    const ALL: &'static [Self];

    /// The kind's long name, e.g. `"user"`.
    fn name(&self) -> &'static str;

    /// The prefix used when no table overrides it, e.g. `"u"`.
    fn default_prefix(&self) -> &'static str;
}

/// Maps identifier kinds to their prefixes.
///
/// Prefixes are non-empty, never contain [`SEPARATOR`], and are unique
/// across kinds.
#[derive(Debug, Clone)]
pub struct PrefixTable<K> {
    entries: HashMap<K, String>,
}

impl<K> PrefixTable<K>
where
    K: Eq + Hash + fmt::Display,
{
    /// Builds a table from `(kind, prefix)` pairs. A repeated kind keeps its
    /// last prefix.
    pub fn new<I, P>(entries: I) -> Result<Self, IdError>
    where
        I: IntoIterator<Item = (K, P)>,
        P: Into<String>,
    {
        let entries: HashMap<K, String> = entries
            .into_iter()
            .map(|(kind, prefix)| (kind, prefix.into()))
            .collect();

        if entries.is_empty() {
            return Err(IdError::EmptyPrefixTable);
        }

        let mut owners: HashMap<&str, &K> = HashMap::with_capacity(entries.len());
        for (kind, prefix) in &entries {
            validate_prefix(kind, prefix)?;
            if let Some(first) = owners.insert(prefix.as_str(), kind) {
                return Err(IdError::DuplicatePrefix {
                    prefix: prefix.clone(),
                    first: first.to_string(),
                    second: kind.to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Returns the prefix for `kind`.
    pub fn get<Q>(&self, kind: &Q) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(kind).map(String::as_str)
    }

    /// Returns true if `kind` has a prefix.
    pub fn contains<Q>(&self, kind: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(kind)
    }

    /// Returns the number of kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(kind, prefix)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(k, p)| (k, p.as_str()))
    }
}

impl<K: IdKind> PrefixTable<K> {
    /// Builds a table from each kind's default prefix.
    pub fn from_kinds() -> Result<Self, IdError> {
        Self::new(K::ALL.iter().map(|kind| (*kind, kind.default_prefix())))
    }

    /// Builds a table that must cover every kind in `K::ALL`.
    pub fn closed<I, P>(entries: I) -> Result<Self, IdError>
    where
        I: IntoIterator<Item = (K, P)>,
        P: Into<String>,
    {
        let table = Self::new(entries)?;
        if let Some(missing) = K::ALL.iter().find(|kind| !table.contains(*kind)) {
            return Err(IdError::MissingPrefix {
                kind: missing.to_string(),
            });
        }
        Ok(table)
    }
}

fn validate_prefix(kind: &impl fmt::Display, prefix: &str) -> Result<(), IdError> {
    let reason = if prefix.is_empty() {
        "prefix cannot be empty"
    } else if prefix.contains(SEPARATOR) {
        "prefix cannot contain the '_' separator"
    } else {
        return Ok(());
    };

    Err(IdError::InvalidPrefix {
        kind: kind.to_string(),
        prefix: prefix.to_string(),
        reason,
    })
}
