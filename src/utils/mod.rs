//! Utility modules shared by the loader and the query engine
//!
//! - Column helpers: typed, validated extraction from Polars DataFrames

pub mod column_helpers;

pub use column_helpers::{require_columns, has_column, string_values, float_values, int_values};
