//! Pure view-model assembly: (cleaned table, widget state) → what the host
//! dashboard renders. The host framework re-invokes these on every
//! interaction; nothing here holds state or touches I/O.

use serde::{Deserialize, Serialize};

use crate::analytics::outliers::{detect_outliers, OutlierReport};
use crate::analytics::ranking::{paginate, rank_by_revenue, Page, TOP_N};
use crate::analytics::segmentation::{
    filter_segment, pareto_series, segment_by_revenue, segment_counts, ParetoPoint, SegmentCounts,
    SegmentFilter, SegmentedRecord,
};
use crate::analytics::summary::{summarize, SummaryStats};
use crate::clean::{CleanedTable, CustomerRecord};
use crate::config::Controls;

/// Widget state owned by the host framework, one field per control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// 1-based page selector value.
    pub page: usize,
    pub segment_filter: SegmentFilter,
    pub low_threshold: f64,
    pub high_threshold: f64,
}

impl UiState {
    /// Widget state as first rendered, seeded from the control specs.
    pub fn defaults_for(controls: &Controls) -> Self {
        UiState {
            page: 1,
            segment_filter: SegmentFilter::All,
            low_threshold: controls.low_threshold.default,
            high_threshold: controls.high_threshold.default,
        }
    }
}

/// Everything the main dashboard page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: SummaryStats,
    /// Top customers by revenue, at most [`TOP_N`] rows.
    pub top_customers: Vec<CustomerRecord>,
    pub page: Page,
}

/// Everything the analytics page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub segmented: Vec<SegmentedRecord>,
    pub segment_counts: SegmentCounts,
    /// The drill-down table for the selected filter.
    pub drilldown: Vec<SegmentedRecord>,
    pub pareto: Vec<ParetoPoint>,
    pub outliers: OutlierReport,
    /// Thresholds actually applied, after clamping to the slider ranges.
    pub low_threshold: f64,
    pub high_threshold: f64,
}

/// Build the dashboard page. The requested page number is clamped to
/// `[1, page_count]` here, at the caller boundary the pagination contract
/// assigns it to.
pub fn render_dashboard(table: &CleanedTable, state: &UiState, controls: &Controls) -> DashboardView {
    let ranked = rank_by_revenue(table);

    let page_count = crate::analytics::ranking::page_count(ranked.len(), controls.page_size);
    let page_number = state.page.clamp(1, page_count.max(1));
    let page = paginate(&ranked, controls.page_size, page_number);

    let mut top_customers = ranked;
    top_customers.truncate(TOP_N);

    DashboardView {
        summary: summarize(table),
        top_customers,
        page,
    }
}

/// Build the analytics page: segmentation, drill-down, Pareto series and the
/// outlier report. Threshold widget values are clamped to their configured
/// ranges before filtering.
pub fn render_analytics(table: &CleanedTable, state: &UiState, controls: &Controls) -> AnalyticsView {
    let segmented = segment_by_revenue(table);
    let counts = segment_counts(&segmented);
    let drilldown = filter_segment(&segmented, state.segment_filter);
    let pareto = pareto_series(&segmented);

    let low = controls.low_threshold.clamp_value(state.low_threshold);
    let high = controls.high_threshold.clamp_value(state.high_threshold);
    let outliers = detect_outliers(table, low, high);

    AnalyticsView {
        segmented,
        segment_counts: counts,
        drilldown,
        pareto,
        outliers,
        low_threshold: low,
        high_threshold: high,
    }
}
