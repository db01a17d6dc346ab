//! Institution Dataset Loading
//!
//! Loads the College Scorecard extract (CSV or Parquet) with Polars and converts it
//! into typed, immutable institution records. Missing metrics become `None` here,
//! including NaN sentinels, so the query engine never sees a NaN.

use polars::prelude::*;
use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::registry::{DEGREE_LEVELS, FIELDS_OF_STUDY, REGIONS};
use crate::utils::{float_values, has_column, int_values, require_columns, string_values};

pub const COL_NAME: &str = "INSTNM";
pub const COL_ADDRESS: &str = "ADDR";
pub const COL_CITY: &str = "CITY";
pub const COL_REGION: &str = "STABBR";
pub const COL_WEBSITE: &str = "INSTURL";
pub const COL_DEGREE_LEVEL: &str = "PREDDEG";
pub const COL_ADMISSION_RATE: &str = "ADM_RATE";

/// Identity, classification and admission columns every dataset must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_NAME,
    COL_ADDRESS,
    COL_CITY,
    COL_REGION,
    COL_WEBSITE,
    COL_DEGREE_LEVEL,
    COL_ADMISSION_RATE,
];

/// Null markers used by Scorecard exports
const NULL_MARKERS: [&str; 3] = ["NA", "NULL", "PrivacySuppressed"];

/// One institution row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionRecord {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    /// `PREDDEG` code as loaded. Unknown codes that fit in a `u8` (e.g. `0`) are
    /// kept as-is; values outside `u8` (negative or above 255) cannot match any
    /// registry code and load as `None`. Both kinds count towards the unknown-code
    /// warning, and strict loading rejects both.
    pub degree_level: Option<u8>,
    pub admission_rate: Option<f64>,
    pub website: Option<String>,
    /// Completion shares, aligned with `InstitutionData::field_columns()`
    pub shares: Vec<Option<f64>>,
}

impl InstitutionRecord {
    /// Completion share for the field column at `column`, `None` when unreported
    pub fn share(&self, column: usize) -> Option<f64> {
        self.shares.get(column).copied().flatten()
    }
}

/// Loader behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject region/degree codes that are not registry keys instead of warning
    pub strict_codes: bool,
}

/// Immutable in-memory dataset shared by every query
#[derive(Debug, Clone)]
pub struct InstitutionData {
    records: Vec<InstitutionRecord>,
    field_columns: Vec<&'static str>,
}

impl InstitutionData {
    /// Load a dataset file (`.parquet`, otherwise CSV)
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        tracing::info!("Loading institution dataset from {}", path.display());

        let df = if path.extension().is_some_and(|ext| ext == "parquet") {
            LazyFrame::scan_parquet(path, Default::default())
                .with_context(|| format!("Failed to scan parquet: {}", path.display()))?
                .collect()
                .with_context(|| "Failed to load institutions parquet")?
        } else {
            Self::read_csv(path)?
        };

        let data = Self::from_dataframe(&df, options)
            .with_context(|| format!("Invalid institution dataset: {}", path.display()))?;

        tracing::info!(
            "  Institutions: {} ({} field-of-study columns) in {:?}",
            data.len(),
            data.field_columns.len(),
            start.elapsed()
        );

        Ok(data)
    }

    fn read_csv(path: &Path) -> Result<DataFrame> {
        let null_values = NullValues::AllColumns(
            NULL_MARKERS.iter().map(|&marker| marker.into()).collect(),
        );
        let parse_options = CsvParseOptions::default()
            .with_null_values(Some(null_values));

        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None) // Scan entire file
            .with_parse_options(parse_options)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
            .finish()
            .with_context(|| "Failed to load institutions CSV")
    }

    /// Convert an already-parsed frame into typed records
    ///
    /// Field columns are the registry codes present in the frame; extra columns
    /// are ignored.
    pub fn from_dataframe(df: &DataFrame, options: &LoadOptions) -> Result<Self> {
        require_columns(df, &REQUIRED_COLUMNS, "institution dataset")?;

        let field_columns: Vec<&'static str> = FIELDS_OF_STUDY
            .codes()
            .filter(|code| has_column(df, code))
            .collect();
        if field_columns.is_empty() {
            bail!("institution dataset: no field-of-study (PCIP) columns found");
        }

        let names = string_values(df, COL_NAME)?;
        let addresses = string_values(df, COL_ADDRESS)?;
        let cities = string_values(df, COL_CITY)?;
        let regions = string_values(df, COL_REGION)?;
        let websites = string_values(df, COL_WEBSITE)?;
        let degree_levels = int_values(df, COL_DEGREE_LEVEL)?;
        let admission_rates = float_values(df, COL_ADMISSION_RATE)?;

        let share_columns = field_columns
            .iter()
            .map(|&code| float_values(df, code))
            .collect::<Result<Vec<_>>>()?;

        let mut unknown_regions = 0usize;
        let mut unknown_degrees = 0usize;
        let mut records = Vec::with_capacity(df.height());

        for (idx, name) in names.into_iter().enumerate() {
            let name = name.ok_or_else(|| anyhow!("row {}: missing {}", idx, COL_NAME))?;

            let region = regions[idx].clone();
            if let Some(code) = region.as_deref() {
                if !REGIONS.contains(code) {
                    if options.strict_codes {
                        bail!("row {} ({}): unknown {} code {:?}", idx, name, COL_REGION, code);
                    }
                    unknown_regions += 1;
                }
            }

            let degree_level = match degree_levels[idx] {
                Some(raw) => {
                    let code = u8::try_from(raw).ok();
                    let known = code.is_some_and(|c| DEGREE_LEVELS.contains(&c));
                    if !known {
                        if options.strict_codes {
                            bail!("row {} ({}): unknown {} code {}", idx, name, COL_DEGREE_LEVEL, raw);
                        }
                        unknown_degrees += 1;
                    }
                    code
                }
                None => None,
            };

            let admission_rate = admission_rates[idx];
            check_fraction(admission_rate, idx, COL_ADMISSION_RATE)?;

            let shares = field_columns
                .iter()
                .zip(&share_columns)
                .map(|(&code, values)| {
                    let value = values[idx];
                    check_fraction(value, idx, code).map(|_| value)
                })
                .collect::<Result<Vec<_>>>()?;

            records.push(InstitutionRecord {
                name,
                address: addresses[idx].clone(),
                city: cities[idx].clone(),
                region,
                degree_level,
                admission_rate,
                website: websites[idx].clone(),
                shares,
            });
        }

        if unknown_regions > 0 {
            tracing::warn!("{} institutions carry a {} code outside the region registry", unknown_regions, COL_REGION);
        }
        if unknown_degrees > 0 {
            tracing::warn!("{} institutions carry a {} code outside the degree registry", unknown_degrees, COL_DEGREE_LEVEL);
        }

        Ok(InstitutionData { records, field_columns })
    }

    /// Build a dataset from records already in memory
    ///
    /// `field_columns` must be field-of-study registry codes and every record's
    /// `shares` must line up with them.
    pub fn from_records(field_columns: &[&str], records: Vec<InstitutionRecord>) -> Result<Self> {
        let field_columns = field_columns
            .iter()
            .map(|&column| {
                FIELDS_OF_STUDY
                    .codes()
                    .find(|code| *code == column)
                    .ok_or_else(|| anyhow!("{} is not a field-of-study code", column))
            })
            .collect::<Result<Vec<_>>>()?;

        for (idx, record) in records.iter().enumerate() {
            if record.shares.len() != field_columns.len() {
                bail!(
                    "record {} ({}): {} shares for {} field columns",
                    idx, record.name, record.shares.len(), field_columns.len()
                );
            }
            check_fraction(record.admission_rate, idx, COL_ADMISSION_RATE)?;
            for (&code, &value) in field_columns.iter().zip(&record.shares) {
                check_fraction(value, idx, code)?;
            }
        }

        Ok(InstitutionData { records, field_columns })
    }

    pub fn records(&self) -> &[InstitutionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field-of-study codes present as dataset columns
    pub fn field_columns(&self) -> &[&'static str] {
        &self.field_columns
    }

    /// Position of a field column within every record's `shares`
    pub fn field_column_index(&self, code: &str) -> Option<usize> {
        self.field_columns.iter().position(|&c| c == code)
    }
}

/// Fractions must be missing or within [0, 1]
fn check_fraction(value: Option<f64>, row: usize, column: &str) -> Result<()> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => {
            bail!("row {}: {} value {} outside [0, 1]", row, column, v)
        }
        _ => Ok(()),
    }
}
