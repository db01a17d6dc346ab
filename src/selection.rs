//! Label → code resolution for presentation layers
//!
//! Selection lists show the registry labels behind a placeholder entry. Picking a
//! placeholder means "not specified"; any other unknown input is an error rather
//! than a silently dropped filter. Raw codes (`PCIP11`, `CA`, `3`) are accepted too.

use serde::Serialize;

use crate::query_engine::QuerySelector;
use crate::registry::{CodeRegistry, LookupError, DEGREE_LEVELS, FIELDS_OF_STUDY, REGIONS};

pub const FIELD_PLACEHOLDER: &str = "Please Select a Field of Study";
pub const FILTER_PLACEHOLDER: &str = "Not Selected";

pub fn field_options() -> Vec<&'static str> {
    with_placeholder(FIELD_PLACEHOLDER, FIELDS_OF_STUDY.all_labels())
}

pub fn region_options() -> Vec<&'static str> {
    with_placeholder(FILTER_PLACEHOLDER, REGIONS.all_labels())
}

pub fn degree_options() -> Vec<&'static str> {
    with_placeholder(FILTER_PLACEHOLDER, DEGREE_LEVELS.all_labels())
}

fn with_placeholder(placeholder: &'static str, labels: Vec<&'static str>) -> Vec<&'static str> {
    let mut options = Vec::with_capacity(labels.len() + 1);
    options.push(placeholder);
    options.extend(labels);
    options
}

/// All three selection lists, placeholder first
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOptions {
    pub fields: Vec<&'static str>,
    pub regions: Vec<&'static str>,
    pub degree_levels: Vec<&'static str>,
}

impl SelectionOptions {
    pub fn new() -> Self {
        Self {
            fields: field_options(),
            regions: region_options(),
            degree_levels: degree_options(),
        }
    }
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve user selections into a query
///
/// Returns `Ok(None)` while the field selector still shows its placeholder.
pub fn resolve_selection(
    field: &str,
    region: Option<&str>,
    degree_level: Option<&str>,
) -> Result<Option<QuerySelector>, LookupError> {
    let field = field.trim();
    if field.is_empty() || field == FIELD_PLACEHOLDER {
        return Ok(None);
    }

    let field_code = label_or_code(&FIELDS_OF_STUDY, field, |input| {
        FIELDS_OF_STUDY.codes().find(|code| *code == input)
    })?;
    let region_code = resolve_filter(&REGIONS, region, |input| {
        REGIONS.codes().find(|code| *code == input)
    })?;
    let degree_code = resolve_filter(&DEGREE_LEVELS, degree_level, |input| {
        input.parse::<u8>().ok().filter(|code| DEGREE_LEVELS.contains(code))
    })?;

    Ok(Some(QuerySelector {
        field: field_code.to_string(),
        region: region_code.map(|code| code.to_string()),
        degree_level: degree_code,
    }))
}

fn resolve_filter<C: Copy + 'static>(
    registry: &CodeRegistry<C>,
    input: Option<&str>,
    parse_code: impl Fn(&str) -> Option<C>,
) -> Result<Option<C>, LookupError> {
    match input.map(str::trim) {
        None => Ok(None),
        Some(value) if value.is_empty() || value == FILTER_PLACEHOLDER => Ok(None),
        Some(value) => label_or_code(registry, value, parse_code).map(Some),
    }
}

fn label_or_code<C: Copy + 'static>(
    registry: &CodeRegistry<C>,
    input: &str,
    parse_code: impl Fn(&str) -> Option<C>,
) -> Result<C, LookupError> {
    registry
        .code_for(input)
        .or_else(|err| parse_code(input).ok_or(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_start_with_placeholder() {
        let options = SelectionOptions::new();

        assert_eq!(options.fields[0], FIELD_PLACEHOLDER);
        assert_eq!(options.regions[0], FILTER_PLACEHOLDER);
        assert_eq!(options.degree_levels[0], FILTER_PLACEHOLDER);
        assert_eq!(options.fields.len(), 39);
        assert_eq!(options.regions.len(), 59);
        assert_eq!(options.degree_levels.len(), 5);
        assert_eq!(options.regions[1], "Alabama");
    }

    #[test]
    fn test_resolve_full_selection() {
        let selector = resolve_selection(
            "Engineering",
            Some("California"),
            Some("Predominantly Bachelor's Degree Granting Institution"),
        )
        .unwrap()
        .unwrap();

        assert_eq!(selector, QuerySelector::new("PCIP14").with_region("CA").with_degree_level(3));
    }

    #[test]
    fn test_placeholders_mean_no_filter() {
        let selector = resolve_selection("History", Some(FILTER_PLACEHOLDER), Some(FILTER_PLACEHOLDER))
            .unwrap()
            .unwrap();

        assert_eq!(selector, QuerySelector::new("PCIP54"));

        let selector = resolve_selection("History", None, Some("")).unwrap().unwrap();
        assert_eq!(selector, QuerySelector::new("PCIP54"));
    }

    #[test]
    fn test_field_placeholder_means_no_query() {
        assert_eq!(resolve_selection(FIELD_PLACEHOLDER, Some("Texas"), None).unwrap(), None);
        assert_eq!(resolve_selection("  ", None, None).unwrap(), None);
    }

    #[test]
    fn test_unknown_label_is_error() {
        let err = resolve_selection("Alchemy", None, None).unwrap_err();
        assert_eq!(err, LookupError::NotFound { registry: "field of study", key: "Alchemy".to_string() });

        let err = resolve_selection("History", Some("Atlantis"), None).unwrap_err();
        assert!(err.to_string().contains("Atlantis"));

        assert!(resolve_selection("History", None, Some("9")).is_err());
    }

    #[test]
    fn test_raw_codes_accepted() {
        let selector = resolve_selection("PCIP11", Some("NY"), Some("2")).unwrap().unwrap();

        assert_eq!(selector, QuerySelector::new("PCIP11").with_region("NY").with_degree_level(2));
    }
}
