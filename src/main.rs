use anyhow::{Context, Result};
use revlens::{clean, config::Controls, export, ingest, render, SessionCache, UiState};
use std::{env, fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) parse args ───────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let input = PathBuf::from(
        args.next()
            .context("usage: revlens <revenue file> [cleaned csv path]")?,
    );
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("cleaned.csv"));

    // ─── 3) ingest + clean through the session cache ─────────────────
    let bytes =
        fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
    let mut cache = SessionCache::new();
    let table = cache.load_or_clean(&bytes, |b| {
        let raw = ingest::load_bytes(&input, b)?;
        clean::clean(&raw)
    })?;

    // ─── 4) render the two pages with default widget state ───────────
    let controls = Controls::default();
    let state = UiState::defaults_for(&controls);

    let dashboard = render::render_dashboard(&table, &state, &controls);
    info!(
        total_with_tax = dashboard.summary.total_with_tax,
        customers = dashboard.summary.customer_count,
        mean_with_tax = ?dashboard.summary.mean_with_tax,
        "summary"
    );

    let analytics = render::render_analytics(&table, &state, &controls);
    info!(
        a = analytics.segment_counts.a,
        b = analytics.segment_counts.b,
        c = analytics.segment_counts.c,
        low_outliers = analytics.outliers.low_revenue.len(),
        spikes = analytics.outliers.spikes.len(),
        "analytics"
    );

    // ─── 5) export the cleaned table ─────────────────────────────────
    export::write_csv(&table, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), "done");

    Ok(())
}
