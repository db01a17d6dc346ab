//! Code Registries
//!
//! Static bidirectional tables between canonical dataset codes and the labels shown
//! in selection lists. All three registries live in read-only statics and are shared
//! by reference across every query.
//!
//! - `FIELDS_OF_STUDY`: `PCIPxx` column → program category (38 entries)
//! - `DEGREE_LEVELS`: `PREDDEG` value → predominant award type (4 entries)
//! - `REGIONS`: `STABBR` abbreviation → state or territory name (58 entries)

mod tables;

pub use tables::{DEGREE_LEVELS, FIELDS_OF_STUDY, REGIONS};

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Registry lookup miss
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{registry} registry has no entry for {key:?}")]
    NotFound { registry: &'static str, key: String },
}

/// Immutable code ↔ label table
///
/// Labels are unique within a registry, so `code_for` is well defined.
#[derive(Debug)]
pub struct CodeRegistry<C: 'static> {
    name: &'static str,
    entries: &'static [(C, &'static str)],
}

impl<C: 'static> CodeRegistry<C> {
    pub const fn new(name: &'static str, entries: &'static [(C, &'static str)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in definition order (the order selection lists are populated in)
    pub fn all_labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(_, label)| *label).collect()
    }
}

impl<C: Copy + 'static> CodeRegistry<C> {
    pub fn codes(&self) -> impl Iterator<Item = C> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    /// Resolve a display label back to its canonical code (exact match)
    pub fn code_for(&self, label: &str) -> Result<C, LookupError> {
        self.entries
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(code, _)| *code)
            .ok_or_else(|| LookupError::NotFound {
                registry: self.name,
                key: label.to_string(),
            })
    }

    /// Display label for a canonical code
    ///
    /// # Examples
    /// ```
    /// use college_recommender_rust::registry::{DEGREE_LEVELS, REGIONS};
    ///
    /// assert_eq!(REGIONS.label_for("CA").unwrap(), "California");
    /// assert!(DEGREE_LEVELS.label_for(&9).is_err());
    /// ```
    pub fn label_for<Q>(&self, code: &Q) -> Result<&'static str, LookupError>
    where
        C: Borrow<Q>,
        Q: ?Sized + PartialEq + fmt::Display,
    {
        self.entries
            .iter()
            .find(|(c, _)| <C as Borrow<Q>>::borrow(c) == code)
            .map(|(_, label)| *label)
            .ok_or_else(|| LookupError::NotFound {
                registry: self.name,
                key: code.to_string(),
            })
    }

    pub fn contains<Q>(&self, code: &Q) -> bool
    where
        C: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.entries.iter().any(|(c, _)| <C as Borrow<Q>>::borrow(c) == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_sizes() {
        assert_eq!(FIELDS_OF_STUDY.len(), 38);
        assert_eq!(DEGREE_LEVELS.len(), 4);
        assert_eq!(REGIONS.len(), 58);
    }

    #[test]
    fn test_labels_unique_per_registry() {
        for labels in [
            FIELDS_OF_STUDY.all_labels(),
            DEGREE_LEVELS.all_labels(),
            REGIONS.all_labels(),
        ] {
            let unique: HashSet<_> = labels.iter().collect();
            assert_eq!(unique.len(), labels.len());
        }
    }

    #[test]
    fn test_label_code_inverse() {
        for code in FIELDS_OF_STUDY.codes() {
            let label = FIELDS_OF_STUDY.label_for(code).unwrap();
            assert_eq!(FIELDS_OF_STUDY.code_for(label).unwrap(), code);
        }
        for code in DEGREE_LEVELS.codes() {
            let label = DEGREE_LEVELS.label_for(&code).unwrap();
            assert_eq!(DEGREE_LEVELS.code_for(label).unwrap(), code);
        }
    }

    #[test]
    fn test_all_labels_definition_order() {
        let labels = REGIONS.all_labels();
        assert_eq!(labels[0], "Alabama");
        assert_eq!(labels[4], "California");
        assert_eq!(labels.last().copied(), Some("Marshall Islands"));

        let degrees = DEGREE_LEVELS.all_labels();
        assert_eq!(degrees[2], "Predominantly Bachelor's Degree Granting Institution");
    }

    #[test]
    fn test_lookups_are_exact() {
        assert_eq!(FIELDS_OF_STUDY.label_for("PCIP11").unwrap(),
            "Computer And Information Sciences And Support Services");
        assert!(REGIONS.label_for("ca").is_err());
        assert!(REGIONS.code_for("california").is_err());
        assert!(REGIONS.contains("NY"));
        assert!(!REGIONS.contains("DC"));
    }

    #[test]
    fn test_not_found_names_registry() {
        let err = REGIONS.code_for("Not Selected").unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound { registry: "region", key: "Not Selected".to_string() }
        );
        assert!(err.to_string().contains("region"));
    }
}
