use anyhow::{Context, Result};
use revlens::{
    analytics::segmentation::SegmentFilter, clean, config::Controls, ingest, render, UiState,
};
use std::{env, path::PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

/// Prints the ABC segmentation table and the outlier report for one file,
/// with default controls. Pass a segment label (All/A/B/C) to drill down.
fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let input = PathBuf::from(
        args.next()
            .context("usage: segment_report <revenue file> [All|A|B|C]")?,
    );
    let filter: SegmentFilter = match args.next() {
        Some(label) => label
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        None => SegmentFilter::All,
    };

    let raw = ingest::load_path(&input)?;
    let table = clean::clean(&raw)?;

    let controls = Controls::default();
    let mut state = UiState::defaults_for(&controls);
    state.segment_filter = filter;
    let view = render::render_analytics(&table, &state, &controls);

    println!(
        "{:<30} {:>15} {:>12} {:>8}",
        "Customer Name", "Sales With Tax", "Cumulative %", "Segment"
    );
    for rec in &view.drilldown {
        println!(
            "{:<30} {:>15} {:>12} {:>8}",
            rec.record.name,
            rec.record
                .sales_with_tax
                .map(|v| format!("{v:.2}"))
                .unwrap_or_default(),
            rec.cumulative_percent
                .map(|p| format!("{p:.2}"))
                .unwrap_or_default(),
            rec.segment.to_string()
        );
    }

    println!(
        "\nsegments: A={} B={} C={}",
        view.segment_counts.a, view.segment_counts.b, view.segment_counts.c
    );

    if view.outliers.low_revenue.is_empty() {
        println!("no low-revenue customers below {}", view.low_threshold);
    } else {
        println!("low revenue (below {}):", view.low_threshold);
        for rec in &view.outliers.low_revenue {
            println!("  {:<30} {:?}", rec.name, rec.sales_with_tax);
        }
    }
    if view.outliers.spikes.is_empty() {
        println!("no revenue spikes above {}", view.high_threshold);
    } else {
        println!("revenue spikes (above {}):", view.high_threshold);
        for rec in &view.outliers.spikes {
            println!("  {:<30} {:?}", rec.name, rec.sales_with_tax);
        }
    }

    Ok(())
}
