//! Result Projector
//!
//! Turns ranked institutions into display rows: fixed column set and order, share
//! converted from fraction to percentage, admission rate passed through untouched.

use polars::prelude::*;
use serde::Serialize;

use crate::query_engine::RankedInstitution;
use crate::registry::FIELDS_OF_STUDY;

pub const PERCENTAGE_COLUMN: &str =
    "Percentage of Degrees/Certificates Awarded In Selected Field of Study";

/// Display column names in output order
pub const DISPLAY_COLUMNS: [&str; 7] = [
    "Institution Name",
    "Address",
    "City",
    "State",
    "Website",
    "Admission Rate",
    PERCENTAGE_COLUMN,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    #[serde(rename = "Institution Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub region: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Admission Rate")]
    pub admission_rate: Option<f64>,
    #[serde(rename = "Percentage of Degrees/Certificates Awarded In Selected Field of Study")]
    pub percentage: f64,
}

pub fn to_percentage(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Project ranked institutions, preserving rank order
pub fn project(ranked: &[RankedInstitution<'_>]) -> Vec<DisplayRow> {
    ranked
        .iter()
        .map(|r| DisplayRow {
            name: r.record.name.clone(),
            address: r.record.address.clone(),
            city: r.record.city.clone(),
            region: r.record.region.clone(),
            website: r.record.website.clone(),
            admission_rate: r.record.admission_rate,
            percentage: to_percentage(r.share),
        })
        .collect()
}

/// Projected result with its heading, ready for a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTable {
    pub heading: String,
    pub field: String,
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    pub fn new(field: &str, rows: Vec<DisplayRow>) -> Self {
        // Unregistered codes fall back to the raw column name
        let label = FIELDS_OF_STUDY.label_for(field).unwrap_or(field);
        Self {
            heading: format!("Colleges with highest percentages in {}", label),
            field: field.to_string(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the first `limit` rows
    pub fn truncate(&mut self, limit: usize) {
        self.rows.truncate(limit);
    }

    /// Render as a DataFrame with display column names
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let names: Vec<&str> = self.rows.iter().map(|r| r.name.as_str()).collect();
        let addresses: Vec<Option<&str>> = self.rows.iter().map(|r| r.address.as_deref()).collect();
        let cities: Vec<Option<&str>> = self.rows.iter().map(|r| r.city.as_deref()).collect();
        let regions: Vec<Option<&str>> = self.rows.iter().map(|r| r.region.as_deref()).collect();
        let websites: Vec<Option<&str>> = self.rows.iter().map(|r| r.website.as_deref()).collect();
        let admission_rates: Vec<Option<f64>> = self.rows.iter().map(|r| r.admission_rate).collect();
        let percentages: Vec<f64> = self.rows.iter().map(|r| r.percentage).collect();

        df!(
            DISPLAY_COLUMNS[0] => names,
            DISPLAY_COLUMNS[1] => addresses,
            DISPLAY_COLUMNS[2] => cities,
            DISPLAY_COLUMNS[3] => regions,
            DISPLAY_COLUMNS[4] => websites,
            DISPLAY_COLUMNS[5] => admission_rates,
            DISPLAY_COLUMNS[6] => percentages,
        )
    }
}
