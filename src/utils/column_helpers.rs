//! DataFrame column extraction helpers with validation
//!
//! Provides explicit patterns for pulling typed, null-aware values out of a
//! Polars DataFrame so missing columns and NaN sentinels never reach the engine.

use polars::prelude::*;
use anyhow::{Context, Result, anyhow};
use std::collections::HashSet;

/// Validate that every required column is present
///
/// # Errors
/// Returns an error naming the first missing column and listing the available ones.
///
/// # Example
/// ```rust
/// use polars::prelude::*;
/// use college_recommender_rust::utils::require_columns;
///
/// let df = df!["INSTNM" => &["Alpha College"]].unwrap();
/// assert!(require_columns(&df, &["INSTNM"], "institutions").is_ok());
/// assert!(require_columns(&df, &["STABBR"], "institutions").is_err());
/// ```
pub fn require_columns(df: &DataFrame, columns: &[&str], context: &str) -> Result<()> {
    let actual_cols: HashSet<String> = df.get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    for &expected in columns {
        if !actual_cols.contains(expected) {
            let mut available: Vec<&String> = actual_cols.iter().collect();
            available.sort();
            return Err(anyhow!(
                "{}: Missing expected column '{}'. Available columns: {:?}",
                context, expected, available
            ));
        }
    }

    Ok(())
}

/// Whether `name` is a column of `df`
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// String column as owned optional values (nulls stay `None`)
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' cannot be read as text", name))?;

    let values = column.str()
        .with_context(|| format!("Column '{}' is not string type", name))?
        .into_iter()
        .map(|opt| opt.map(|s| s.to_string()))
        .collect();

    Ok(values)
}

/// Numeric column as `f64`, with both nulls and NaN mapped to `None`
///
/// # Errors
/// A non-null cell that does not parse as a number is an error naming the row,
/// column and raw value. Only real nulls (including the CSV null markers) load as
/// `None`.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let original = df.column(name)
        .with_context(|| format!("Column '{}' not found", name))?;
    let column = original
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' is not numeric", name))?;

    let floats = column.f64()
        .with_context(|| format!("Column '{}' is not float type", name))?;
    if floats.null_count() != original.null_count() {
        return Err(unparsed_cell_error(original, floats.into_iter().map(|v| v.is_some()), name));
    }

    let values = floats
        .into_iter()
        .map(|opt| opt.filter(|v| !v.is_nan()))
        .collect();

    Ok(values)
}

/// Integer column as `i64` (floats are truncated by the cast, NaN becomes `None`)
///
/// # Errors
/// Same parse check as [`float_values`].
pub fn int_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let original = df.column(name)
        .with_context(|| format!("Column '{}' not found", name))?;
    let column = original
        .cast(&DataType::Int64)
        .with_context(|| format!("Column '{}' is not integer type", name))?;

    let ints = column.i64()
        .with_context(|| format!("Column '{}' is not integer type", name))?;
    let expected_nulls = original.null_count() + nan_count(original)?;
    if ints.null_count() != expected_nulls {
        let floats = float_values(df, name)?;
        let parsed = ints
            .into_iter()
            .zip(floats)
            .map(|(int, float)| int.is_some() || float.is_none());
        return Err(unparsed_cell_error(original, parsed, name));
    }

    Ok(ints.into_iter().collect())
}

fn nan_count(column: &Column) -> Result<usize> {
    if !column.dtype().is_float() {
        return Ok(0);
    }
    let floats = column.cast(&DataType::Float64)?;
    Ok(floats.f64()?.into_iter().filter(|v| v.is_some_and(f64::is_nan)).count())
}

/// Error for the first non-null cell the numeric cast turned into null
fn unparsed_cell_error(
    original: &Column,
    parsed: impl Iterator<Item = bool>,
    name: &str,
) -> anyhow::Error {
    let offender = original.cast(&DataType::String).ok().and_then(|raw| {
        raw.str().ok()?
            .into_iter()
            .zip(parsed)
            .enumerate()
            .find_map(|(idx, (raw, is_parsed))| match raw {
                Some(value) if !is_parsed => Some((idx, value.to_string())),
                _ => None,
            })
    });

    match offender {
        Some((row, value)) => anyhow!("row {}: {} value {:?} is not a number", row, name, value),
        None => anyhow!("Column '{}' has values that are not numbers", name),
    }
}
