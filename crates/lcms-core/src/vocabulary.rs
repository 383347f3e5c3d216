//! The permitted vocabulary of override values.
//!
//! A `Vocabulary` is built once per run and handed to the reconciler by
//! reference. It has no interior mutability, so every check in a run sees
//! the same set.

use std::collections::BTreeSet;

use crate::errors::CoreError;

/// Metlin positive-mode adducts recognised as valid best-ion picks.
pub const METLIN_POSITIVE_IONS: &[&str] = &[
    "M+H",
    "M+2H",
    "M+3H",
    "M+H+NH4",
    "M+H+Na",
    "M+H+K",
    "M+H-H2O",
    "M+H-2H2O",
    "M+Na",
    "M+2Na",
    "M+2Na-H",
    "M+3Na",
    "M+K",
    "M+2K-H",
    "M+Li",
    "M+NH4",
    "M+ACN+H",
    "M+ACN+Na",
    "M+2ACN+H",
    "M+2ACN+2H",
    "M+3ACN+2H",
    "M+CH3OH+H",
    "M+DMSO+H",
    "M+IsoProp+H",
    "M+IsoProp+Na+H",
    "2M+H",
    "2M+NH4",
    "2M+Na",
    "2M+K",
    "2M+ACN+H",
    "2M+ACN+Na",
];

/// Immutable set of recognised override values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    names: BTreeSet<String>,
}

impl Vocabulary {
    /// The built-in Metlin positive-mode ion set.
    #[must_use]
    pub fn metlin_positive() -> Self {
        Self {
            names: METLIN_POSITIVE_IONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Build a vocabulary from explicit names.
    ///
    /// Names are trimmed; blank entries are rejected.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the list is empty or contains a
    /// blank name.
    pub fn from_names<I, S>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(CoreError::Validation(
                    "vocabulary entries must not be blank".into(),
                ));
            }
            set.insert(name.to_string());
        }
        if set.is_empty() {
            return Err(CoreError::Validation("vocabulary must not be empty".into()));
        }
        Ok(Self { names: set })
    }

    /// Membership test. Exact, case-sensitive match.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.names.contains(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::metlin_positive()
    }
}
