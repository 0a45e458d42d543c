use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analytics::ranking::rank_by_revenue;
use crate::clean::{CleanedTable, CustomerRecord};

/// Cumulative-share cutoff below which a customer is tier A.
pub const SEGMENT_A_CUTOFF: f64 = 80.0;

/// Cumulative-share cutoff below which a customer is tier B.
pub const SEGMENT_B_CUTOFF: f64 = 95.0;

/// ABC revenue tier: A carries the first 80% of revenue, B the next 15%,
/// C the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    A,
    B,
    C,
}

impl Segment {
    /// Tier for a cumulative revenue share. Boundaries are inclusive on the
    /// low side of each band; an absent share falls through to C.
    fn classify(cumulative_percent: Option<f64>) -> Segment {
        match cumulative_percent {
            Some(p) if p <= SEGMENT_A_CUTOFF => Segment::A,
            Some(p) if p <= SEGMENT_B_CUTOFF => Segment::B,
            _ => Segment::C,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::A => write!(f, "A"),
            Segment::B => write!(f, "B"),
            Segment::C => write!(f, "C"),
        }
    }
}

/// A customer with its running share of total revenue and assigned tier.
/// Derived fresh on every view computation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentedRecord {
    #[serde(flatten)]
    pub record: CustomerRecord,
    /// Running share of total `sales_with_tax` in percent, over the
    /// descending sort. `None` when the row has no revenue value.
    pub cumulative_percent: Option<f64>,
    pub segment: Segment,
}

/// Rank by revenue, accumulate each customer's share of the total, classify.
///
/// Rows without a revenue value do not advance the running sum, carry no
/// cumulative percent and land in segment C. A zero total defines every
/// share as 0.0, so every valued row lands in segment A.
pub fn segment_by_revenue(table: &CleanedTable) -> Vec<SegmentedRecord> {
    let ranked = rank_by_revenue(table);
    let total: f64 = ranked.iter().filter_map(|r| r.sales_with_tax).sum();

    let mut cumulative = 0.0;
    ranked
        .into_iter()
        .map(|record| {
            let cumulative_percent = record.sales_with_tax.map(|value| {
                cumulative += value;
                if total == 0.0 {
                    0.0
                } else {
                    cumulative / total * 100.0
                }
            });
            SegmentedRecord {
                segment: Segment::classify(cumulative_percent),
                cumulative_percent,
                record,
            }
        })
        .collect()
}

/// Drill-down selection: `All` passes everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SegmentFilter {
    #[default]
    All,
    Only(Segment),
}

impl FromStr for SegmentFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "All" | "all" => Ok(SegmentFilter::All),
            "A" | "a" => Ok(SegmentFilter::Only(Segment::A)),
            "B" | "b" => Ok(SegmentFilter::Only(Segment::B)),
            "C" | "c" => Ok(SegmentFilter::Only(Segment::C)),
            other => Err(format!("unknown segment filter: {other:?}")),
        }
    }
}

pub fn filter_segment(
    segmented: &[SegmentedRecord],
    filter: SegmentFilter,
) -> Vec<SegmentedRecord> {
    match filter {
        SegmentFilter::All => segmented.to_vec(),
        SegmentFilter::Only(segment) => segmented
            .iter()
            .filter(|r| r.segment == segment)
            .cloned()
            .collect(),
    }
}

/// How many customers landed in each tier, for the distribution chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SegmentCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

pub fn segment_counts(segmented: &[SegmentedRecord]) -> SegmentCounts {
    let mut counts = SegmentCounts::default();
    for rec in segmented {
        match rec.segment {
            Segment::A => counts.a += 1,
            Segment::B => counts.b += 1,
            Segment::C => counts.c += 1,
        }
    }
    counts
}

/// One point of the Pareto chart: the revenue bar plus the running-share
/// line value for a single ranked customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoPoint {
    pub name: String,
    pub sales_with_tax: Option<f64>,
    pub cumulative_percent: Option<f64>,
}

pub fn pareto_series(segmented: &[SegmentedRecord]) -> Vec<ParetoPoint> {
    segmented
        .iter()
        .map(|r| ParetoPoint {
            name: r.record.name.clone(),
            sales_with_tax: r.record.sales_with_tax,
            cumulative_percent: r.cumulative_percent,
        })
        .collect()
}
