use serde::Serialize;

use crate::clean::{CleanedTable, CustomerRecord};

/// Rows flagged against the two user-tunable revenue thresholds. Both sets
/// empty is a normal, reportable state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutlierReport {
    /// `sales_with_tax` strictly below the low threshold: possible churn.
    pub low_revenue: Vec<CustomerRecord>,
    /// `sales_with_tax` strictly above the high threshold: spikes to review.
    pub spikes: Vec<CustomerRecord>,
}

impl OutlierReport {
    pub fn is_empty(&self) -> bool {
        self.low_revenue.is_empty() && self.spikes.is_empty()
    }
}

/// Filter the table against two independent thresholds. The thresholds are
/// not required to be ordered relative to each other; rows without a revenue
/// value match neither filter.
pub fn detect_outliers(
    table: &CleanedTable,
    low_threshold: f64,
    high_threshold: f64,
) -> OutlierReport {
    let low_revenue = table
        .records()
        .iter()
        .filter(|r| matches!(r.sales_with_tax, Some(v) if v < low_threshold))
        .cloned()
        .collect();
    let spikes = table
        .records()
        .iter()
        .filter(|r| matches!(r.sales_with_tax, Some(v) if v > high_threshold))
        .cloned()
        .collect();
    OutlierReport {
        low_revenue,
        spikes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[(&str, Option<f64>)]) -> CleanedTable {
        CleanedTable::from_records(
            values
                .iter()
                .map(|(n, v)| CustomerRecord {
                    name: n.to_string(),
                    sales: *v,
                    sales_with_tax: *v,
                })
                .collect(),
        )
    }

    #[test]
    fn low_threshold_is_a_strict_inequality() {
        let report = detect_outliers(
            &table(&[("under", Some(4999.0)), ("at", Some(5000.0))]),
            5000.0,
            300_000.0,
        );
        let names: Vec<&str> = report.low_revenue.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["under"]);
    }

    #[test]
    fn high_threshold_is_a_strict_inequality() {
        let report = detect_outliers(
            &table(&[("at", Some(300_000.0)), ("over", Some(300_001.0))]),
            5000.0,
            300_000.0,
        );
        let names: Vec<&str> = report.spikes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["over"]);
    }

    #[test]
    fn sets_are_disjoint_when_low_is_below_high() {
        let report = detect_outliers(
            &table(&[
                ("churn", Some(100.0)),
                ("normal", Some(50_000.0)),
                ("spike", Some(900_000.0)),
            ]),
            5000.0,
            300_000.0,
        );
        for low in &report.low_revenue {
            assert!(!report.spikes.contains(low));
        }
        assert_eq!(report.low_revenue.len(), 1);
        assert_eq!(report.spikes.len(), 1);
    }

    #[test]
    fn overlapping_thresholds_can_flag_a_row_twice() {
        // low above high is allowed; the filters are independent
        let report = detect_outliers(&table(&[("both", Some(10_000.0))]), 50_000.0, 5000.0);
        assert_eq!(report.low_revenue.len(), 1);
        assert_eq!(report.spikes.len(), 1);
    }

    #[test]
    fn missing_revenue_matches_neither_filter() {
        let report = detect_outliers(&table(&[("missing", None)]), 5000.0, 300_000.0);
        assert!(report.is_empty());
    }

    #[test]
    fn empty_report_is_a_normal_state() {
        let report = detect_outliers(&table(&[("normal", Some(50_000.0))]), 5000.0, 300_000.0);
        assert!(report.is_empty());
    }
}
