//! Link analytics chart data
//!
//! Pure transformations from raw backend analytics (click counts per time
//! bucket, per-visit geo data) into series a dashboard chart can plot
//! directly. Nothing here performs I/O or keeps state between calls.

pub mod aggregator;
pub mod chart;
pub mod labels;
pub mod models;
pub mod panels;
pub mod series;
pub mod window;

pub use aggregator::{aggregate, CountryCounts};
pub use chart::to_series;
pub use labels::{formatter_for, LabelFormatter};
pub use models::{ChartPoint, ClickRecord, GeoInfo, GeoRecord, TimeSeriesPoint, UNKNOWN_COUNTRY};
pub use panels::{total_clicks, ClicksPanel, GeoPanel};
pub use series::{fill, fill_at};
pub use window::{ChartError, DurationWindow, Granularity};
