//! Chart series shaping

use crate::analytics::aggregator::CountryCounts;
use crate::analytics::models::ChartPoint;

/// One chart point per country, in the mapping's order
pub fn to_series(counts: &CountryCounts) -> Vec<ChartPoint> {
    counts
        .iter()
        .map(|(label, count)| ChartPoint {
            x: label.to_string(),
            y: count,
        })
        .collect()
}
