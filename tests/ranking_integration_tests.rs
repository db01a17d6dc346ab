//! Ranking Integration Tests
//!
//! Writes a small Scorecard-style CSV, loads it through Polars and runs the full
//! resolve → rank → project pipeline.

use college_recommender_rust::{
    resolve_selection, InstitutionData, LoadOptions, QueryEngine, QueryError, QuerySelector,
    PERCENTAGE_COLUMN,
};
use std::path::PathBuf;
use std::sync::Arc;

const SCORECARD_CSV: &str = "\
UNITID,INSTNM,ADDR,CITY,STABBR,INSTURL,PREDDEG,ADM_RATE,PCIP11,PCIP14,PCIP54
1,Alpha College,1 Main St,Fresno,CA,alpha.edu,3,0.5,0.80,0.10,0.01
2,Beta University,2 Oak Ave,San Diego,CA,beta.edu,3,0.3,0.80,NA,0.02
3,Gamma Institute,3 Pine Rd,Albany,NY,gamma.edu,2,0.1,0.95,0.05,NULL
4,Delta Tech,4 Elm St,Sacramento,CA,delta.edu,3,PrivacySuppressed,NA,0.90,0.00
5,Epsilon Academy,,Austin,TX,,1,NA,0.0,0.0,0.0
";

fn write_fixture(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "college_recommender_{}_{}.csv",
        name,
        std::process::id()
    ));
    std::fs::write(&path, SCORECARD_CSV).expect("Failed to write fixture CSV");
    path
}

fn load_engine(name: &str) -> QueryEngine {
    let path = write_fixture(name);
    let data = InstitutionData::load(&path, &LoadOptions::default()).expect("Failed to load fixture");
    let _ = std::fs::remove_file(&path);
    QueryEngine::new(Arc::new(data))
}

#[test]
fn test_csv_load_null_markers() {
    let engine = load_engine("null_markers");
    let data = engine.data();

    assert_eq!(data.len(), 5);
    assert_eq!(data.field_columns(), &["PCIP11", "PCIP14", "PCIP54"]);

    let delta = &data.records()[3];
    assert_eq!(delta.name, "Delta Tech");
    assert_eq!(delta.admission_rate, None);
    assert_eq!(delta.share(0), None);

    let epsilon = &data.records()[4];
    assert_eq!(epsilon.address, None);
    assert_eq!(epsilon.website, None);
    assert_eq!(epsilon.degree_level, Some(1));
}

#[test]
fn test_rank_without_filters() {
    let engine = load_engine("no_filters");

    let table = engine.recommend(&QuerySelector::new("PCIP11")).unwrap();
    let names: Vec<&str> = table.rows.iter().map(|r| r.name.as_str()).collect();

    // Delta does not report PCIP11; Epsilon reports a true zero
    assert_eq!(names, vec!["Gamma Institute", "Alpha College", "Beta University", "Epsilon Academy"]);
    assert_eq!(table.rows[0].percentage, 0.95 * 100.0);
    assert_eq!(table.rows[3].percentage, 0.0);
}

#[test]
fn test_rank_with_resolved_labels() {
    let engine = load_engine("labels");

    let selector = resolve_selection(
        "Computer And Information Sciences And Support Services",
        Some("California"),
        Some("Predominantly Bachelor's Degree Granting Institution"),
    )
    .unwrap()
    .unwrap();
    let table = engine.recommend(&selector).unwrap();
    let names: Vec<&str> = table.rows.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["Alpha College", "Beta University"]);
    assert_eq!(table.rows[0].admission_rate, Some(0.5));
    assert_eq!(
        table.heading,
        "Colleges with highest percentages in Computer And Information Sciences And Support Services"
    );
}

#[test]
fn test_display_frame() {
    let engine = load_engine("frame");

    let table = engine.recommend(&QuerySelector::new("PCIP14").with_region("CA")).unwrap();
    let df = table.to_dataframe().unwrap();

    // Beta's PCIP14 is NA
    assert_eq!(df.height(), 2);
    let top = df.column(PERCENTAGE_COLUMN).unwrap().f64().unwrap().get(0);
    assert_eq!(top, Some(0.90 * 100.0));
}

#[test]
fn test_field_column_absent_from_dataset() {
    let engine = load_engine("schema_mismatch");

    let err = engine.recommend(&QuerySelector::new("PCIP26")).unwrap_err();
    assert!(matches!(err, QueryError::SchemaMismatch { ref field, .. } if field == "PCIP26"));
}

#[test]
fn test_no_matches_is_empty() {
    let engine = load_engine("empty");

    let table = engine
        .recommend(&QuerySelector::new("PCIP54").with_region("WY"))
        .unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_csv_non_numeric_share_fails_load() {
    let path = std::env::temp_dir().join(format!(
        "college_recommender_bad_share_{}.csv",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "INSTNM,ADDR,CITY,STABBR,INSTURL,PREDDEG,ADM_RATE,PCIP11\n\
         A,1 Main St,Fresno,CA,a.edu,3,0.5,0.9\n\
         B,2 Oak Ave,Fresno,CA,b.edu,3,0.5,bogus\n\
         C,3 Pine Rd,Fresno,CA,c.edu,3,0.5,0.1\n\
         E,5 Elm St,Fresno,CA,e.edu,3,0.5,0.1\n",
    )
    .expect("Failed to write fixture CSV");

    let result = InstitutionData::load(&path, &LoadOptions::default());
    let _ = std::fs::remove_file(&path);

    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("PCIP11"));
    assert!(err.contains("bogus"));
    assert!(err.contains("row 1"));
}
