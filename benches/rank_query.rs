use college_recommender_rust::{
    InstitutionData, InstitutionRecord, QueryEngine, QuerySelector, FIELDS_OF_STUDY, REGIONS,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

/// Scorecard-sized synthetic dataset (~6,500 institutions)
fn synthetic_engine() -> QueryEngine {
    let fields: Vec<&str> = FIELDS_OF_STUDY.codes().collect();
    let regions: Vec<&str> = REGIONS.codes().collect();

    let records = (0..6_500u64)
        .map(|i| {
            let shares = (0..fields.len() as u64)
                .map(|f| {
                    let x = (i * 7_919 + f * 104_729) % 1_000;
                    // Roughly one in seven unreported
                    if x % 7 == 0 { None } else { Some(x as f64 / 1_000.0) }
                })
                .collect();

            InstitutionRecord {
                name: format!("Institution {:05}", i),
                address: Some(format!("{} College Ave", i)),
                city: Some("Springfield".to_string()),
                region: Some(regions[(i as usize) % regions.len()].to_string()),
                degree_level: Some((i % 4 + 1) as u8),
                admission_rate: Some((i % 100) as f64 / 100.0),
                website: Some(format!("inst{}.edu", i)),
                shares,
            }
        })
        .collect();

    let data = InstitutionData::from_records(&fields, records).expect("valid synthetic dataset");
    QueryEngine::new(Arc::new(data))
}

fn bench_rank(c: &mut Criterion) {
    let engine = synthetic_engine();

    let unfiltered = QuerySelector::new("PCIP11");
    c.bench_function("rank_unfiltered", |b| {
        b.iter(|| engine.rank(black_box(&unfiltered)).unwrap().len())
    });

    let filtered = QuerySelector::new("PCIP14").with_region("CA").with_degree_level(3);
    c.bench_function("rank_region_degree", |b| {
        b.iter(|| engine.rank(black_box(&filtered)).unwrap().len())
    });

    c.bench_function("recommend_unfiltered", |b| {
        b.iter(|| engine.recommend(black_box(&unfiltered)).unwrap().len())
    });
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
