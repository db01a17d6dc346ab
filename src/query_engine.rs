//! Ranking Query Engine
//!
//! Filters institutions by region and predominant degree level, drops those that do
//! not report the selected field of study, and orders the rest by completion share.
//!
//! Ordering: share descending, then institution name ascending, then source order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

use crate::data::{InstitutionData, InstitutionRecord};
use crate::projector::{project, DisplayTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The selected field-of-study code is not a column of the loaded dataset
    #[error("field of study column '{field}' not found in dataset columns {available:?}")]
    SchemaMismatch {
        field: String,
        available: Vec<String>,
    },
}

/// Resolved query input: one field of study plus optional filters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuerySelector {
    pub field: String,
    pub region: Option<String>,
    pub degree_level: Option<u8>,
}

impl QuerySelector {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            region: None,
            degree_level: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_degree_level(mut self, degree_level: u8) -> Self {
        self.degree_level = Some(degree_level);
        self
    }

    /// Filters in application order (region is the more selective one)
    pub fn filters(&self) -> Vec<RecordFilter<'_>> {
        let mut filters = Vec::with_capacity(2);
        if let Some(region) = self.region.as_deref() {
            filters.push(RecordFilter::Region(region));
        }
        if let Some(degree_level) = self.degree_level {
            filters.push(RecordFilter::DegreeLevel(degree_level));
        }
        filters
    }
}

/// Exact-match record predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFilter<'a> {
    /// `STABBR` equality, case-sensitive
    Region(&'a str),
    /// `PREDDEG` equality
    DegreeLevel(u8),
}

impl RecordFilter<'_> {
    pub fn matches(&self, record: &InstitutionRecord) -> bool {
        match *self {
            RecordFilter::Region(code) => record.region.as_deref() == Some(code),
            RecordFilter::DegreeLevel(code) => record.degree_level == Some(code),
        }
    }
}

/// An institution paired with its reported share in the selected field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedInstitution<'a> {
    pub record: &'a InstitutionRecord,
    /// Fraction in [0, 1]; always present
    pub share: f64,
}

/// Rank institutions by their share in `field`
///
/// Returns an empty vector when nothing matches; fails only when `field` is not a
/// column of the dataset.
pub fn rank<'a>(
    data: &'a InstitutionData,
    field: &str,
    region: Option<&str>,
    degree_level: Option<u8>,
) -> Result<Vec<RankedInstitution<'a>>, QueryError> {
    let mut filters = Vec::with_capacity(2);
    if let Some(code) = region {
        filters.push(RecordFilter::Region(code));
    }
    if let Some(code) = degree_level {
        filters.push(RecordFilter::DegreeLevel(code));
    }
    rank_filtered(data, field, &filters)
}

/// Rank with an explicit filter list; filters are conjunctive and commute
pub fn rank_filtered<'a>(
    data: &'a InstitutionData,
    field: &str,
    filters: &[RecordFilter<'_>],
) -> Result<Vec<RankedInstitution<'a>>, QueryError> {
    let column = data
        .field_column_index(field)
        .ok_or_else(|| QueryError::SchemaMismatch {
            field: field.to_string(),
            available: data.field_columns().iter().map(|c| c.to_string()).collect(),
        })?;

    let mut ranked: Vec<RankedInstitution<'a>> = data
        .records()
        .iter()
        .filter(|record| filters.iter().all(|f| f.matches(record)))
        .filter_map(|record| {
            record
                .share(column)
                .map(|share| RankedInstitution { record, share })
        })
        .collect();

    // Stable: exact name ties keep source order
    ranked.sort_by(compare_ranked);

    Ok(ranked)
}

fn compare_ranked(a: &RankedInstitution<'_>, b: &RankedInstitution<'_>) -> Ordering {
    b.share
        .partial_cmp(&a.share)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.record.name.cmp(&b.record.name))
}

/// Shared handle over the loaded dataset
///
/// Cloning is cheap; every clone reads the same immutable records.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    data: Arc<InstitutionData>,
}

impl QueryEngine {
    pub fn new(data: Arc<InstitutionData>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &InstitutionData {
        &self.data
    }

    pub fn rank(&self, selector: &QuerySelector) -> Result<Vec<RankedInstitution<'_>>, QueryError> {
        let start = Instant::now();
        let ranked = rank_filtered(&self.data, &selector.field, &selector.filters())?;

        tracing::debug!(
            "Ranked {} of {} institutions for {} (region: {:?}, degree: {:?}) in {:?}",
            ranked.len(),
            self.data.len(),
            selector.field,
            selector.region,
            selector.degree_level,
            start.elapsed()
        );

        Ok(ranked)
    }

    /// Rank and project into a display table
    pub fn recommend(&self, selector: &QuerySelector) -> Result<DisplayTable, QueryError> {
        let ranked = self.rank(selector)?;
        Ok(DisplayTable::new(&selector.field, project(&ranked)))
    }
}
