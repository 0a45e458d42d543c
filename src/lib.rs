//! Customer revenue analytics over a single uploaded spreadsheet: ingestion,
//! cleaning/validation, rankings, ABC segmentation, outlier reporting and the
//! view-models a hosting dashboard renders from them.
//!
//! The pipeline is strictly one way: raw upload → [`clean::CleanedTable`] →
//! {ranking, segmentation, outlier} views → serializable view-models. All
//! computations are pure and synchronous; the only state a session holds is
//! a [`cache::SessionCache`] keyed by uploaded-file identity.

pub mod analytics;
pub mod cache;
pub mod clean;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod render;

pub use analytics::outliers::{detect_outliers, OutlierReport};
pub use analytics::ranking::{paginate, rank_by_revenue, top_n, Page};
pub use analytics::segmentation::{
    filter_segment, segment_by_revenue, Segment, SegmentFilter, SegmentedRecord,
};
pub use analytics::summary::{summarize, SummaryStats};
pub use cache::{FileId, SessionCache};
pub use clean::{clean, CleanedTable, CustomerRecord};
pub use config::{Controls, SliderSpec};
pub use error::{Error, FormatError, Result};
pub use render::{render_analytics, render_dashboard, AnalyticsView, DashboardView, UiState};
