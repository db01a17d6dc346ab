//! Rank colleges from the command line
//!
//! Usage:
//!   cargo run --bin rank_colleges -- <field> [state] [degree level]
//!
//! Each argument is a display label or a raw code, e.g.
//!   rank_colleges "Engineering" "California"
//!   rank_colleges PCIP14 CA 3
//! Pass "Not Selected" to skip a filter. The dataset path comes from `DATA_PATH`.

use college_recommender_rust::{resolve_selection, AppConfig, InstitutionData, QueryEngine};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "college_recommender_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(field) = args.first() else {
        anyhow::bail!("usage: rank_colleges <field> [state] [degree level]");
    };

    let Some(selector) = resolve_selection(
        field,
        args.get(1).map(String::as_str),
        args.get(2).map(String::as_str),
    )?
    else {
        println!("Select a field of study to see ranked colleges.");
        return Ok(());
    };

    let config = AppConfig::from_env();
    let data = InstitutionData::load(&config.data_path, &config.load_options())?;
    let engine = QueryEngine::new(Arc::new(data));

    let table = engine.recommend(&selector)?;
    let df = table.to_dataframe()?;

    std::env::set_var("POLARS_FMT_MAX_ROWS", "25");
    println!("{}", table.heading);
    println!("{}", df);
    println!("{} institutions", table.len());

    Ok(())
}
