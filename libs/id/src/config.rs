//! Plain-data generator configuration.
//!
//! Deserializes from any serde format. The entropy source is not data and is
//! injected on the resulting builder.
//!
//! ```toml
//! alphabet = "0123456789abcdef"
//! size = 20
//!
//! [prefixes]
//! user = "u"
//! invoice = "in"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{IdError, IdGenerator, IdGeneratorBuilder, PrefixTable};

/// Generator settings keyed by kind name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Symbols used for the suffix; the default alphabet when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,

    /// Random bytes per identifier; 16 when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,

    /// Kind name to prefix.
    pub prefixes: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Overlays `other` on top of `self`. Set fields in `other` win; prefix
    /// tables are merged.
    pub fn merge(mut self, other: GeneratorConfig) -> Self {
        if other.alphabet.is_some() {
            self.alphabet = other.alphabet;
        }
        if other.size.is_some() {
            self.size = other.size;
        }
        self.prefixes.extend(other.prefixes);
        self
    }

    /// Validates the prefix table and returns a builder awaiting an entropy
    /// source.
    pub fn builder(&self) -> Result<IdGeneratorBuilder<String>, IdError> {
        let prefixes = PrefixTable::new(self.prefixes.clone())?;
        let mut builder = IdGenerator::builder(prefixes);
        if let Some(alphabet) = &self.alphabet {
            builder = builder.alphabet(alphabet.clone());
        }
        if let Some(size) = self.size {
            builder = builder.size(size);
        }
        Ok(builder)
    }
}
