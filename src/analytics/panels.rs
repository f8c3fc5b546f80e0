//! Chart-ready panels for the analytics dashboard

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::aggregator::{aggregate, CountryCounts};
use crate::analytics::chart::to_series;
use crate::analytics::labels::LabelFormatter;
use crate::analytics::models::{ChartPoint, ClickRecord, GeoRecord, TimeSeriesPoint};
use crate::analytics::series::fill_at;
use crate::analytics::window::DurationWindow;

/// Sum of all raw click counts, with the same coercion as the series.
/// Saturates at `u64::MAX`.
pub fn total_clicks(records: &[ClickRecord]) -> u64 {
    records
        .iter()
        .map(ClickRecord::parsed_count)
        .fold(0u64, u64::saturating_add)
}

/// Clicks-over-time panel
#[derive(Debug, Clone, Serialize)]
pub struct ClicksPanel {
    pub days: DurationWindow,
    pub description: &'static str,
    pub caption: String,
    pub total_clicks: u64,
    pub label_pattern: &'static str,
    pub series: Vec<TimeSeriesPoint>,
}

impl ClicksPanel {
    pub fn build(records: &[ClickRecord], window: DurationWindow, now: DateTime<Utc>) -> Self {
        let description = window.description();

        Self {
            days: window,
            description,
            caption: format!("Clicks for the last {description}"),
            total_clicks: total_clicks(records),
            label_pattern: LabelFormatter::for_window(window).pattern(),
            series: fill_at(records, window, now),
        }
    }
}

/// Visits-by-country panel
#[derive(Debug, Clone, Serialize)]
pub struct GeoPanel {
    pub categories: Vec<String>,
    pub counts: CountryCounts,
    pub series: Vec<ChartPoint>,
}

impl GeoPanel {
    pub fn build(records: &[GeoRecord]) -> Self {
        let counts = aggregate(records);

        Self {
            categories: counts.labels(),
            series: to_series(&counts),
            counts,
        }
    }
}
