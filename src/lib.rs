//! College Recommender
//!
//! Ranks institutions by the share of their completions awarded in a chosen field
//! of study, optionally narrowed by state/territory and predominant degree level.
//!
//! - `registry/`: static code ↔ label tables (fields, degree levels, regions)
//! - `data`: dataset loading with Polars into typed records
//! - `query_engine`: filter and rank
//! - `projector`: display rows and tables
//! - `selection`: placeholder-aware label resolution for UIs
//! - `config`: environment configuration
//! - `api_server` (feature `api`): Axum JSON surface

pub mod registry;
pub mod utils;
pub mod data;
pub mod query_engine;
pub mod projector;
pub mod selection;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use registry::{CodeRegistry, LookupError, DEGREE_LEVELS, FIELDS_OF_STUDY, REGIONS};
pub use data::{InstitutionData, InstitutionRecord, LoadOptions};
pub use query_engine::{rank, QueryEngine, QueryError, QuerySelector, RankedInstitution};
pub use projector::{project, DisplayRow, DisplayTable, PERCENTAGE_COLUMN};
pub use selection::{resolve_selection, SelectionOptions, FIELD_PLACEHOLDER, FILTER_PLACEHOLDER};
pub use config::AppConfig;

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
